#![forbid(unsafe_code)]

//! Segmented one-time-code input.
//!
//! [`OneTimeCodeInput`] shows a code of N digits as N boxes and writes
//! accepted edits back into a caller-owned [`Observable<String>`]. Every
//! edit passes through a [`CodeFilter`]; when an edit fills the last box
//! the completion callback runs with the full code.
//!
//! What a box shows is a pure function of the code value, the focus flag
//! and the box index, see [`box_state`].
//!
//! # Layouts
//!
//! With at least three rows the widget draws bordered boxes:
//!
//! ```text
//! ╭───╮ ╭───╮ ╭───╮ ╭───╮
//! │ 4 │ │ 2 │ │ - │ │ - │
//! ╰───╯ ╰───╯ ╰───╯ ╰───╯
//! ```
//!
//! With one or two rows it falls back to a compact line (`4 2 - -`) and
//! marks the active position in reverse video.
//!
//! # Focus
//!
//! The widget starts unfocused. The host focuses it once right after it
//! first appears (see [`OneTimeCodeInput::on_appear`]), and a left click
//! inside the last rendered area focuses it again. The widget never
//! unfocuses itself.

use std::cell::Cell as StdCell;
use std::fmt;

use codebox_core::event::{Event, KeyCode, KeyEvent};
use codebox_core::geometry::Rect;
use codebox_core::glyph_policy::GlyphPolicy;
use codebox_core::input_hint::InputHint;
use codebox_core::reactive::Observable;
use codebox_render::cell::{Cell, PackedRgba};
use codebox_render::drawing::{BorderChars, Draw};
use codebox_render::frame::{Frame, HitId, HitRegion};
use codebox_style::Style;
use unicode_width::UnicodeWidthChar;

use crate::Widget;
use crate::code_filter::{CodeFilter, RejectReason};

/// Glyph shown in boxes past the end of the code.
pub const DEFAULT_PLACEHOLDER: char = '-';
/// Default box width in cells, borders included.
pub const DEFAULT_BOX_WIDTH: u16 = 5;
/// Default gap between boxes in cells.
pub const DEFAULT_SPACING: u16 = 1;
/// Height of a bordered box.
pub const BOX_HEIGHT: u16 = 3;

const MIN_BOX_WIDTH: u16 = 3;
const GRAY: PackedRgba = PackedRgba::rgb(128, 128, 128);
const ACCENT_BLUE: PackedRgba = PackedRgba::rgb(0, 122, 255);

/// Display state of one box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxState {
    /// Box position, `0..length`.
    pub index: usize,
    /// The digit at `index`, or the placeholder.
    pub glyph: char,
    /// Whether `glyph` comes from the code.
    pub filled: bool,
    /// Whether this box is where the next digit goes, while focused.
    pub highlighted: bool,
}

/// Compute the display state of box `index`.
///
/// `glyph` is `value[index]` when the value is long enough, otherwise
/// `placeholder`. `highlighted` holds only when `focused` and `index` equals
/// the value's length, so a complete code highlights nothing.
#[must_use]
pub fn box_state(value: &str, focused: bool, index: usize, placeholder: char) -> BoxState {
    let digit = value.chars().nth(index);
    BoxState {
        index,
        glyph: digit.unwrap_or(placeholder),
        filled: digit.is_some(),
        highlighted: focused && index == value.chars().count(),
    }
}

/// Result of one proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed: the event was not an edit, or the accepted value
    /// equals the current one.
    Unchanged,
    /// The code value was replaced.
    Updated {
        /// The new code value.
        value: String,
        /// Whether this edit filled the last box.
        completed: bool,
    },
    /// The edit was discarded and the code value kept.
    Rejected(RejectReason),
}

impl EditOutcome {
    /// Whether this edit completed the code.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Updated { completed: true, .. })
    }

    /// Whether the code value changed.
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// Whether the edit was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

type CompleteCallback = Box<dyn Fn(&str)>;

/// A row of digit boxes bound to a shared code value.
pub struct OneTimeCodeInput {
    code: Observable<String>,
    filter: CodeFilter,
    on_complete: Option<CompleteCallback>,
    focused: bool,
    appeared: bool,
    placeholder: char,
    box_width: u16,
    spacing: u16,
    digit_style: Style,
    placeholder_style: Style,
    border_style: Style,
    highlight_style: Style,
    glyph_policy: GlyphPolicy,
    hit_id: HitId,
    /// Area of the last render, for tap detection.
    last_area: StdCell<Rect>,
}

impl fmt::Debug for OneTimeCodeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneTimeCodeInput")
            .field("code", &self.code)
            .field("length", &self.filter.capacity())
            .field("focused", &self.focused)
            .field("appeared", &self.appeared)
            .field("has_on_complete", &self.on_complete.is_some())
            .field("last_area", &self.last_area.get())
            .finish_non_exhaustive()
    }
}

impl OneTimeCodeInput {
    /// Bind a new input of `length` boxes to `code`.
    ///
    /// The caller keeps its own clone of `code`; the widget reads and writes
    /// through the shared handle.
    pub fn new(code: Observable<String>, length: usize) -> Self {
        Self {
            code,
            filter: CodeFilter::new(length),
            on_complete: None,
            focused: false,
            appeared: false,
            placeholder: DEFAULT_PLACEHOLDER,
            box_width: DEFAULT_BOX_WIDTH,
            spacing: DEFAULT_SPACING,
            digit_style: Style::new().bold(),
            placeholder_style: Style::new().fg(GRAY).bold(),
            border_style: Style::new().fg(GRAY).dim(),
            highlight_style: Style::new().fg(ACCENT_BLUE).bold(),
            glyph_policy: GlyphPolicy::default(),
            hit_id: HitId::default(),
            last_area: StdCell::new(Rect::default()),
        }
    }

    // --- Builder methods ---

    /// Run `callback` with the full code each time an edit completes it.
    #[must_use]
    pub fn on_complete(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Set the glyph shown in empty boxes (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the box width, borders included (builder). Clamped to 3.
    #[must_use]
    pub fn with_box_width(mut self, width: u16) -> Self {
        self.box_width = width.max(MIN_BOX_WIDTH);
        self
    }

    /// Set the gap between boxes (builder).
    #[must_use]
    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the style of entered digits (builder).
    #[must_use]
    pub fn with_digit_style(mut self, style: Style) -> Self {
        self.digit_style = style;
        self
    }

    /// Set the placeholder style (builder).
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set the border style of idle boxes (builder).
    #[must_use]
    pub fn with_border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the border style of the highlighted box (builder).
    #[must_use]
    pub fn with_highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Set the glyph policy deciding between rounded and ASCII borders.
    #[must_use]
    pub fn with_glyph_policy(mut self, policy: GlyphPolicy) -> Self {
        self.glyph_policy = policy;
        self
    }

    /// Set the id registered in the frame's hit grid (builder).
    #[must_use]
    pub fn with_hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    /// Start focused (builder).
    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    // --- State access ---

    /// A clone of the shared code handle.
    pub fn code(&self) -> Observable<String> {
        self.code.clone()
    }

    /// Current code value.
    pub fn value(&self) -> String {
        self.code.get()
    }

    /// Number of boxes.
    pub fn length(&self) -> usize {
        self.filter.capacity()
    }

    /// Whether every box is filled.
    pub fn is_complete(&self) -> bool {
        self.code.with(|value| self.filter.is_complete(value))
    }

    /// Whether the input currently has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the input focus.
    pub fn focus(&mut self) {
        self.set_focused(true);
    }

    /// Set focus explicitly. The widget itself never clears focus; hosts
    /// call this with `false` to dismiss the keyboard.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            codebox_core::debug!(focused, "code input focus changed");
        }
        self.focused = focused;
    }

    /// Record that the widget became visible.
    ///
    /// Returns `true` the first time only. Hosts answer `true` by scheduling
    /// a deferred [`focus`](Self::focus) that runs after the current render
    /// pass.
    pub fn on_appear(&mut self) -> bool {
        !std::mem::replace(&mut self.appeared, true)
    }

    /// Area the widget was last rendered into.
    pub fn last_area(&self) -> Rect {
        self.last_area.get()
    }

    /// Keyboard hint for hosts with an on-screen keyboard.
    pub fn input_hint(&self) -> InputHint {
        InputHint::one_time_code()
    }

    /// Display state of every box, in order.
    pub fn box_states(&self) -> Vec<BoxState> {
        self.code.with(|value| self.states_for(value))
    }

    fn states_for(&self, value: &str) -> Vec<BoxState> {
        (0..self.length())
            .map(|i| box_state(value, self.focused, i, self.placeholder))
            .collect()
    }

    /// Width needed to show every box in the bordered layout.
    pub fn required_width(&self) -> u16 {
        let n = u16::try_from(self.length()).unwrap_or(u16::MAX);
        n.saturating_mul(self.box_width)
            .saturating_add(n.saturating_sub(1).saturating_mul(self.spacing))
    }

    /// Height of the bordered layout.
    pub fn required_height(&self) -> u16 {
        BOX_HEIGHT
    }

    // --- Editing ---

    /// Handle an input event.
    ///
    /// Key presses and pastes edit the code only while focused. A left
    /// click inside the last rendered area focuses the input.
    pub fn handle_event(&mut self, event: &Event) -> EditOutcome {
        match event {
            Event::Mouse(mouse) if mouse.is_tap() => {
                if self.last_area.get().contains(mouse.x, mouse.y) {
                    self.focus();
                }
                EditOutcome::Unchanged
            }
            Event::Key(key) if self.focused && key.is_press() => self.handle_key(key),
            Event::Paste(paste) if self.focused => {
                let proposed = self.code.with(|value| format!("{value}{}", paste.text));
                self.propose(&proposed)
            }
            _ => EditOutcome::Unchanged,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EditOutcome {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
                let mut proposed = self.code.get();
                proposed.push(c);
                self.propose(&proposed)
            }
            KeyCode::Backspace => {
                let mut proposed = self.code.get();
                if proposed.pop().is_none() {
                    return EditOutcome::Unchanged;
                }
                self.propose(&proposed)
            }
            _ => EditOutcome::Unchanged,
        }
    }

    /// Propose a whole new raw value, as a text field edit would.
    ///
    /// Hosts use this for autofill. The proposal is sanitized; if it still
    /// has more digits than boxes the code value is left as it was.
    pub fn propose(&self, raw: &str) -> EditOutcome {
        let previous = self.code.get();
        let next = match self.filter.accept(raw) {
            Ok(next) => next,
            Err(reason) => {
                codebox_core::debug!(%reason, "code edit rejected");
                return EditOutcome::Rejected(reason);
            }
        };
        if next == previous {
            return EditOutcome::Unchanged;
        }

        let completed = self.filter.completes(&previous, &next);
        self.code.set(next.clone());
        codebox_core::trace!(len = next.len(), completed, "code edit accepted");

        if completed {
            codebox_core::debug!(length = self.length(), "code complete");
            if let Some(callback) = &self.on_complete {
                callback(&next);
            }
        }
        EditOutcome::Updated {
            value: next,
            completed,
        }
    }

    // --- Rendering ---

    fn border_chars(&self) -> BorderChars {
        BorderChars::for_policy(self.glyph_policy)
    }

    fn glyph_cell(&self, state: &BoxState) -> Cell {
        let mut cell = Cell::from_char(state.glyph);
        let style = if state.filled {
            self.digit_style
        } else {
            self.placeholder_style
        };
        crate::apply_style(&mut cell, style);
        cell
    }

    /// Draw bordered boxes; returns where the highlighted glyph sits.
    fn render_boxed(&self, area: Rect, frame: &mut Frame, states: &[BoxState]) -> Option<(u16, u16)> {
        let chars = self.border_chars();
        let stride = self.box_width.saturating_add(self.spacing);
        let inner = self.box_width - 2;
        let mut cursor = None;

        for state in states {
            let Some(x) = box_origin(area, state.index, stride, self.box_width) else {
                break;
            };
            let rect = Rect::new(x, area.y, self.box_width, BOX_HEIGHT);

            let mut border = Cell::default();
            let border_style = if state.highlighted {
                self.border_style.patch(self.highlight_style)
            } else {
                self.border_style
            };
            crate::apply_style(&mut border, border_style);
            frame.draw_border(rect, chars, border);

            let glyph_width = state.glyph.width().unwrap_or(1).max(1) as u16;
            let glyph_x = x + 1 + inner.saturating_sub(glyph_width) / 2;
            let glyph_y = area.y + 1;
            frame.buffer.set(glyph_x, glyph_y, self.glyph_cell(state));

            if state.highlighted {
                cursor = Some((glyph_x, glyph_y));
            }
        }
        cursor
    }

    /// Draw the one-row fallback; returns where the highlighted glyph sits.
    fn render_compact(&self, area: Rect, frame: &mut Frame, states: &[BoxState]) -> Option<(u16, u16)> {
        let stride = 1u16.saturating_add(self.spacing);
        let mut cursor = None;

        for state in states {
            let Some(x) = box_origin(area, state.index, stride, 1) else {
                break;
            };
            let mut cell = self.glyph_cell(state);
            if state.highlighted {
                crate::apply_style(&mut cell, self.highlight_style.reverse());
                cursor = Some((x, area.y));
            }
            frame.buffer.set(x, area.y, cell);
        }
        cursor
    }
}

/// Left edge of box `index`, if a box of `width` fits inside `area`.
fn box_origin(area: Rect, index: usize, stride: u16, width: u16) -> Option<u16> {
    let offset = u16::try_from(index).ok()?.checked_mul(stride)?;
    let x = area.x.checked_add(offset)?;
    (x.checked_add(width)? <= area.right()).then_some(x)
}

impl Widget for OneTimeCodeInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "OneTimeCodeInput",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        self.last_area.set(area);
        if area.is_empty() {
            return;
        }
        frame.register_hit(area, self.hit_id, HitRegion::Content);

        let states = self.box_states();
        let cursor = if area.height >= BOX_HEIGHT {
            self.render_boxed(area, frame, &states)
        } else {
            self.render_compact(area, frame, &states)
        };

        if self.focused {
            frame.set_input_hint(Some(self.input_hint()));
            if cursor.is_some() {
                frame.set_cursor(cursor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebox_core::event::{KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
    use codebox_render::cell::StyleFlags;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn input(value: &str, length: usize) -> (Observable<String>, OneTimeCodeInput) {
        let code = Observable::new(value.to_string());
        let widget = OneTimeCodeInput::new(code.clone(), length);
        (code, widget)
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |code: &str| sink.borrow_mut().push(code.to_string()))
    }

    fn type_str(widget: &mut OneTimeCodeInput, text: &str) {
        for c in text.chars() {
            widget.handle_event(&Event::key(KeyCode::Char(c)));
        }
    }

    fn glyphs(widget: &OneTimeCodeInput) -> String {
        widget.box_states().iter().map(|s| s.glyph).collect()
    }

    fn char_at(frame: &Frame, x: u16, y: u16) -> Option<char> {
        frame.buffer.get(x, y).and_then(|c| c.content.as_char())
    }

    // --- Box renderer ---

    #[test]
    fn box_state_filled_and_placeholder() {
        let s = box_state("12", false, 1, '-');
        assert_eq!(s.glyph, '2');
        assert!(s.filled);
        assert!(!s.highlighted);

        let s = box_state("12", false, 4, '-');
        assert_eq!(s.glyph, '-');
        assert!(!s.filled);
    }

    #[test]
    fn highlight_follows_length_only_when_focused() {
        assert!(box_state("12", true, 2, '-').highlighted);
        assert!(!box_state("12", true, 1, '-').highlighted);
        assert!(!box_state("12", true, 3, '-').highlighted);
        assert!(!box_state("12", false, 2, '-').highlighted);
    }

    #[test]
    fn complete_code_highlights_nothing() {
        let (_code, widget) = input("123456", 6);
        let widget = widget.with_focused(true);
        assert!(widget.box_states().iter().all(|s| !s.highlighted));
        assert!(widget.is_complete());
    }

    #[test]
    fn box_states_cover_every_index() {
        let (_code, widget) = input("9", 4);
        let states = widget.box_states();
        assert_eq!(states.len(), 4);
        assert_eq!(
            states.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    // --- Editing ---

    #[test]
    fn typing_fills_boxes_without_completing() {
        let (code, mut widget) = input("", 6);
        let (calls, cb) = recorder();
        widget = widget.on_complete(cb);
        widget.focus();

        type_str(&mut widget, "123");

        assert_eq!(code.get(), "123");
        assert_eq!(glyphs(&widget), "123---");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn last_digit_fires_completion() {
        let (code, widget) = input("12345", 6);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);

        let outcome = widget.handle_event(&Event::key(KeyCode::Char('6')));

        assert_eq!(
            outcome,
            EditOutcome::Updated {
                value: "123456".into(),
                completed: true
            }
        );
        assert_eq!(code.get(), "123456");
        assert_eq!(*calls.borrow(), vec!["123456".to_string()]);
    }

    #[test]
    fn over_long_paste_is_rejected() {
        let (code, widget) = input("", 4);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);

        let outcome = widget.handle_event(&Event::paste("12345"));

        assert!(outcome.is_rejected());
        assert_eq!(code.get(), "");
        assert_eq!(code.version(), 0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn paste_appends_digits_only() {
        let (code, mut widget) = input("1", 6);
        widget.focus();
        let outcome = widget.handle_event(&Event::paste("23 4-5"));
        assert!(outcome.is_updated());
        assert!(!outcome.is_completed());
        assert_eq!(code.get(), "12345");
    }

    #[test]
    fn full_code_paste_completes() {
        let (_code, widget) = input("", 6);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);
        assert!(widget.handle_event(&Event::paste("482 913")).is_completed());
        assert_eq!(*calls.borrow(), vec!["482913".to_string()]);
    }

    #[test]
    fn typing_past_capacity_is_rejected() {
        let (code, widget) = input("1234", 4);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);

        let outcome = widget.handle_event(&Event::key(KeyCode::Char('5')));

        assert_eq!(
            outcome,
            EditOutcome::Rejected(RejectReason::TooLong {
                digits: 5,
                capacity: 4
            })
        );
        assert_eq!(code.get(), "1234");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn non_digit_key_is_silently_dropped() {
        let (code, mut widget) = input("12", 6);
        widget.focus();
        assert_eq!(
            widget.handle_event(&Event::key(KeyCode::Char('x'))),
            EditOutcome::Unchanged
        );
        assert_eq!(code.get(), "12");
        assert_eq!(code.version(), 0);
    }

    #[test]
    fn backspace_removes_last_digit() {
        let (code, mut widget) = input("123", 6);
        widget.focus();
        assert!(widget.handle_event(&Event::key(KeyCode::Backspace)).is_updated());
        assert_eq!(code.get(), "12");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let (code, mut widget) = input("", 6);
        widget.focus();
        assert_eq!(
            widget.handle_event(&Event::key(KeyCode::Backspace)),
            EditOutcome::Unchanged
        );
        assert_eq!(code.version(), 0);
    }

    #[test]
    fn clearing_and_refilling_fires_again() {
        let (code, widget) = input("", 4);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);

        type_str(&mut widget, "1234");
        for _ in 0..4 {
            widget.handle_event(&Event::key(KeyCode::Backspace));
        }
        assert_eq!(code.get(), "");
        type_str(&mut widget, "5678");

        assert_eq!(
            *calls.borrow(),
            vec!["1234".to_string(), "5678".to_string()]
        );
    }

    #[test]
    fn removing_from_full_code_does_not_fire() {
        let (_code, widget) = input("1234", 4);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);
        widget.handle_event(&Event::key(KeyCode::Backspace));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn keys_ignored_while_unfocused() {
        let (code, mut widget) = input("", 6);
        type_str(&mut widget, "12");
        widget.handle_event(&Event::paste("34"));
        assert_eq!(code.get(), "");
    }

    #[test]
    fn modified_and_released_keys_are_ignored() {
        let (code, mut widget) = input("", 6);
        widget.focus();
        let ctrl = KeyEvent::new(KeyCode::Char('1')).with_modifiers(Modifiers::CTRL);
        let release = KeyEvent::new(KeyCode::Char('2')).with_kind(KeyEventKind::Release);
        let repeat = KeyEvent::new(KeyCode::Char('3')).with_kind(KeyEventKind::Repeat);
        widget.handle_event(&Event::Key(ctrl));
        widget.handle_event(&Event::Key(release));
        widget.handle_event(&Event::Key(repeat));
        assert_eq!(code.get(), "3");
    }

    #[test]
    fn propose_replaces_whole_value() {
        let (code, widget) = input("12", 6);
        let (calls, cb) = recorder();
        let widget = widget.on_complete(cb);

        // Autofill works without focus.
        assert!(widget.propose("Your code: 654321").is_completed());
        assert_eq!(code.get(), "654321");
        assert_eq!(calls.borrow().len(), 1);

        assert_eq!(widget.propose("654321"), EditOutcome::Unchanged);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn host_set_does_not_fire_callback() {
        let (code, widget) = input("", 4);
        let (calls, cb) = recorder();
        let widget = widget.on_complete(cb);
        code.set("1234".to_string());
        assert!(widget.is_complete());
        assert_eq!(glyphs(&widget), "1234");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn zero_length_is_inert() {
        let (code, widget) = input("", 0);
        let (calls, cb) = recorder();
        let mut widget = widget.on_complete(cb).with_focused(true);

        assert!(widget.box_states().is_empty());
        assert!(widget.handle_event(&Event::key(KeyCode::Char('1'))).is_rejected());
        assert_eq!(widget.propose("abc"), EditOutcome::Unchanged);
        assert_eq!(code.get(), "");
        assert!(calls.borrow().is_empty());
        assert_eq!(widget.required_width(), 0);
    }

    // --- Focus lifecycle ---

    #[test]
    fn starts_unfocused_and_appears_once() {
        let (_code, mut widget) = input("", 6);
        assert!(!widget.is_focused());
        assert!(widget.on_appear());
        assert!(!widget.on_appear());
        assert!(!widget.is_focused());
    }

    #[test]
    fn tap_inside_last_area_focuses() {
        let (_code, mut widget) = input("", 4);
        let mut frame = Frame::new(40, 5);
        widget.render(Rect::new(2, 1, 23, 3), &mut frame);

        widget.handle_event(&Event::click(0, 0));
        assert!(!widget.is_focused());

        widget.handle_event(&Event::click(10, 2));
        assert!(widget.is_focused());
    }

    #[test]
    fn non_left_clicks_do_not_focus() {
        let (_code, mut widget) = input("", 4);
        let mut frame = Frame::new(40, 5);
        widget.render(Rect::new(0, 0, 23, 3), &mut frame);

        let right = MouseEvent::new(MouseEventKind::Down(MouseButton::Right), 1, 1);
        let release = MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 1, 1);
        widget.handle_event(&Event::Mouse(right));
        widget.handle_event(&Event::Mouse(release));
        assert!(!widget.is_focused());
    }

    #[test]
    fn tap_before_first_render_does_nothing() {
        let (_code, mut widget) = input("", 4);
        widget.handle_event(&Event::click(0, 0));
        assert!(!widget.is_focused());
    }

    #[test]
    fn widget_never_unfocuses_itself() {
        let (_code, mut widget) = input("", 4);
        let mut frame = Frame::new(40, 5);
        widget.render(Rect::new(0, 0, 23, 3), &mut frame);
        widget.focus();

        widget.handle_event(&Event::click(39, 4));
        widget.handle_event(&Event::key(KeyCode::Escape));
        widget.handle_event(&Event::Focus(false));
        type_str(&mut widget, "1234");
        assert!(widget.is_focused());

        widget.set_focused(false);
        assert!(!widget.is_focused());
    }

    // --- Rendering ---

    #[test]
    fn renders_rounded_boxes() {
        let (_code, widget) = input("42", 4);
        let mut frame = Frame::new(23, 3);
        widget.render(frame.bounds(), &mut frame);

        assert_eq!(frame.buffer.row_text(0), "╭───╮ ╭───╮ ╭───╮ ╭───╮");
        assert_eq!(frame.buffer.row_text(1), "│ 4 │ │ 2 │ │ - │ │ - │");
        assert_eq!(frame.buffer.row_text(2), "╰───╯ ╰───╯ ╰───╯ ╰───╯");
    }

    #[test]
    fn ascii_policy_uses_ascii_borders() {
        let (_code, widget) = input("7", 2);
        let widget = widget.with_glyph_policy(GlyphPolicy::ascii());
        let mut frame = Frame::new(11, 3);
        widget.render(frame.bounds(), &mut frame);

        assert_eq!(frame.buffer.row_text(0), "+---+ +---+");
        assert_eq!(frame.buffer.row_text(1), "| 7 | | - |");
        assert_eq!(frame.buffer.row_text(2), "+---+ +---+");
    }

    #[test]
    fn digit_and_placeholder_styles() {
        let (_code, widget) = input("1", 2);
        let mut frame = Frame::new(11, 3);
        widget.render(frame.bounds(), &mut frame);

        let digit = frame.buffer.get(2, 1).copied().unwrap_or_default();
        assert!(digit.attrs.has_flag(StyleFlags::BOLD));
        let placeholder = frame.buffer.get(8, 1).copied().unwrap_or_default();
        assert_eq!(placeholder.fg, GRAY);
    }

    #[test]
    fn focused_render_highlights_and_places_cursor() {
        let (_code, widget) = input("12", 4);
        let widget = widget.with_focused(true);
        let mut frame = Frame::new(23, 3);
        widget.render(frame.bounds(), &mut frame);

        // Third box starts at x = 12; its glyph sits at x = 14.
        let border = frame.buffer.get(12, 0).copied().unwrap_or_default();
        assert_eq!(border.fg, ACCENT_BLUE);
        let idle = frame.buffer.get(0, 0).copied().unwrap_or_default();
        assert_eq!(idle.fg, GRAY);

        assert_eq!(frame.cursor_position, Some((14, 1)));
        assert_eq!(frame.input_hint, Some(InputHint::one_time_code()));
    }

    #[test]
    fn unfocused_render_sets_no_cursor_or_hint() {
        let (_code, widget) = input("12", 4);
        let mut frame = Frame::new(23, 3);
        widget.render(frame.bounds(), &mut frame);
        assert_eq!(frame.cursor_position, None);
        assert_eq!(frame.input_hint, None);
        let border = frame.buffer.get(12, 0).copied().unwrap_or_default();
        assert_eq!(border.fg, GRAY);
    }

    #[test]
    fn complete_focused_render_has_no_cursor() {
        let (_code, widget) = input("1234", 4);
        let widget = widget.with_focused(true);
        let mut frame = Frame::new(23, 3);
        widget.render(frame.bounds(), &mut frame);
        assert_eq!(frame.cursor_position, None);
        assert_eq!(frame.input_hint, Some(InputHint::one_time_code()));
    }

    #[test]
    fn compact_layout_on_short_area() {
        let (_code, widget) = input("12", 4);
        let widget = widget.with_focused(true);
        let mut frame = Frame::new(10, 1);
        widget.render(frame.bounds(), &mut frame);

        assert_eq!(frame.buffer.row_text(0), "1 2 - -   ");
        let active = frame.buffer.get(4, 0).copied().unwrap_or_default();
        assert!(active.attrs.has_flag(StyleFlags::REVERSE));
        assert_eq!(frame.cursor_position, Some((4, 0)));
    }

    #[test]
    fn boxes_that_do_not_fit_are_skipped() {
        let (_code, widget) = input("", 6);
        let mut frame = Frame::new(14, 3);
        widget.render(frame.bounds(), &mut frame);
        // Two boxes need 11 cells, a third would need 17.
        assert_eq!(frame.buffer.row_text(1), "│ - │ │ - │   ");
    }

    #[test]
    fn custom_geometry_and_placeholder() {
        let (_code, widget) = input("5", 2);
        let widget = widget
            .with_box_width(3)
            .with_spacing(0)
            .with_placeholder('_')
            .with_glyph_policy(GlyphPolicy::ascii());
        let mut frame = Frame::new(6, 3);
        widget.render(frame.bounds(), &mut frame);
        assert_eq!(frame.buffer.row_text(1), "|5||_|");
        assert_eq!(widget.required_width(), 6);
    }

    #[test]
    fn box_width_is_clamped() {
        let (_code, widget) = input("", 2);
        let widget = widget.with_box_width(1);
        assert_eq!(widget.required_width(), 7);
    }

    #[test]
    fn render_registers_hit_region() {
        let (_code, widget) = input("", 2);
        let widget = widget.with_hit_id(HitId::new(9));
        let mut frame = Frame::with_hit_grid(20, 5);
        let area = Rect::new(1, 1, 11, 3);
        widget.render(area, &mut frame);

        assert_eq!(frame.hit_test(1, 1), Some((HitId::new(9), HitRegion::Content)));
        assert_eq!(frame.hit_test(0, 0), None);
        assert_eq!(widget.last_area(), area);
    }

    #[test]
    fn render_is_idempotent() {
        let (_code, widget) = input("31", 4);
        let widget = widget.with_focused(true);
        let mut a = Frame::new(23, 3);
        let mut b = Frame::new(23, 3);
        widget.render(a.bounds(), &mut a);
        widget.render(a.bounds(), &mut a);
        widget.render(b.bounds(), &mut b);
        assert_eq!(a.buffer, b.buffer);
        assert_eq!(char_at(&a, 2, 1), Some('3'));
    }

    #[test]
    fn empty_area_draws_nothing() {
        let (_code, widget) = input("1", 2);
        let mut frame = Frame::with_hit_grid(5, 5);
        widget.render(Rect::new(0, 0, 0, 3), &mut frame);
        assert!(frame.buffer.cells().iter().all(Cell::is_empty));
        assert_eq!(frame.hit_test(0, 0), None);
    }
}
