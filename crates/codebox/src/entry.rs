#![forbid(unsafe_code)]

//! A ready-made model hosting one code input.
//!
//! `CodeEntry` is what an application embeds when the code entry is the
//! whole screen: it centres the input, routes events to it, and takes
//! care of the focus-on-appear handshake.
//!
//! ```
//! use codebox::prelude::*;
//! use codebox::ProgramSimulator;
//!
//! let code = Observable::new(String::new());
//! let mut sim = ProgramSimulator::new(CodeEntry::new(code.clone(), 6));
//! sim.init();
//! sim.capture_frame(40, 5);
//! assert!(sim.model().input().is_focused());
//!
//! sim.inject_event(Event::paste("482913"));
//! assert_eq!(code.get(), "482913");
//! assert_eq!(sim.logs(), ["code complete"]);
//! ```

use codebox_core::event::Event;
use codebox_core::geometry::{Rect, Sides};
use codebox_core::glyph_policy::GlyphPolicy;
use codebox_core::reactive::Observable;
use codebox_render::frame::Frame;
use codebox_runtime::program::{Cmd, Model};
use codebox_widgets::{OneTimeCodeInput, Widget};

/// Log line emitted when an edit completes the code.
pub const COMPLETE_LOG: &str = "code complete";

/// Messages understood by [`CodeEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMsg {
    /// The entry was shown for the first time.
    Appeared,
    /// A terminal event.
    Event(Event),
}

impl From<Event> for EntryMsg {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

/// Full-screen host for a [`OneTimeCodeInput`].
#[derive(Debug)]
pub struct CodeEntry {
    input: OneTimeCodeInput,
    padding: Sides,
}

impl CodeEntry {
    /// Host a new input of `length` boxes bound to `code`.
    ///
    /// Border glyphs follow [`GlyphPolicy::detect`].
    pub fn new(code: Observable<String>, length: usize) -> Self {
        Self::from_env_with(code, length, |key| std::env::var(key).ok())
    }

    /// Like [`CodeEntry::new`], with a custom environment lookup for the
    /// glyph policy.
    pub fn from_env_with<F>(code: Observable<String>, length: usize, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::with_input(
            OneTimeCodeInput::new(code, length)
                .with_glyph_policy(GlyphPolicy::from_env_with(get_env)),
        )
    }

    /// Host an input configured by the caller.
    pub fn with_input(input: OneTimeCodeInput) -> Self {
        Self {
            input,
            padding: Sides::all(1),
        }
    }

    /// Forward a completion callback to the hosted input.
    #[must_use]
    pub fn on_complete(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.input = self.input.on_complete(callback);
        self
    }

    /// Set the padding kept around the input (builder).
    #[must_use]
    pub fn with_padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// The hosted input.
    pub fn input(&self) -> &OneTimeCodeInput {
        &self.input
    }

    /// The hosted input, mutably.
    pub fn input_mut(&mut self) -> &mut OneTimeCodeInput {
        &mut self.input
    }

    /// Where the input is drawn inside `bounds`.
    pub fn input_area(&self, bounds: Rect) -> Rect {
        bounds.inner(self.padding).centered(
            self.input.required_width(),
            self.input.required_height(),
        )
    }
}

impl Model for CodeEntry {
    type Message = EntryMsg;

    fn init(&mut self) -> Cmd<EntryMsg> {
        Cmd::defer(EntryMsg::Appeared)
    }

    fn update(&mut self, msg: EntryMsg) -> Cmd<EntryMsg> {
        match msg {
            EntryMsg::Appeared => {
                if self.input.on_appear() {
                    self.input.focus();
                }
                Cmd::none()
            }
            EntryMsg::Event(event) => {
                if self.input.handle_event(&event).is_completed() {
                    Cmd::log(COMPLETE_LOG)
                } else {
                    Cmd::none()
                }
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = self.input_area(frame.bounds());
        self.input.render(area, frame);
    }
}
