#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for a render pass.
//!
//! The `Frame` is the render target that `Model::view()` methods write to.
//! It bundles the cell grid ([`Buffer`]) with the cursor, an optional
//! mouse hit grid, and the [`InputHint`] the focused widget publishes for
//! hosts with an on-screen keyboard.
//!
//! # Usage
//!
//! ```
//! use codebox_render::cell::Cell;
//! use codebox_render::frame::Frame;
//!
//! let mut frame = Frame::new(20, 3);
//! frame.buffer.set(0, 0, Cell::from_char('1'));
//! frame.set_cursor(Some((1, 0)));
//! assert_eq!(frame.cursor_position, Some((1, 0)));
//! ```

use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::drawing::{BorderChars, Draw};
use codebox_core::geometry::Rect;
use codebox_core::input_hint::InputHint;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Identifier for a clickable region in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Widget border area.
    Border,
}

/// Hit testing grid: maps screen positions to the widget drawn there.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<(HitId, HitRegion)>>,
}

impl HitGrid {
    /// Create a new, empty hit grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Register a region; later registrations win where they overlap.
    pub fn register(&mut self, rect: Rect, id: HitId, region: HitRegion) {
        let clipped = rect.intersection(&Rect::from_size(self.width, self.height));
        for y in clipped.y..clipped.bottom() {
            let row_start = y as usize * self.width as usize;
            let start = row_start + clipped.x as usize;
            let end = row_start + clipped.right() as usize;
            self.cells[start..end].fill(Some((id, region)));
        }
    }

    /// Hit test at the given position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion)> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

/// The render target for one pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this frame.
    pub buffer: Buffer,

    /// Optional hit grid for mouse hit testing.
    ///
    /// When `Some`, widgets can register clickable regions.
    pub hit_grid: Option<HitGrid>,

    /// Cursor position (if the cursor should be shown).
    pub cursor_position: Option<(u16, u16)>,

    /// Whether the cursor should be visible.
    pub cursor_visible: bool,

    /// Keyboard hint published by the focused input, if any.
    pub input_hint: Option<InputHint>,
}

impl Frame {
    /// Create a new frame without hit testing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
            cursor_position: None,
            cursor_visible: true,
            input_hint: None,
        }
    }

    /// Create a new frame with hit testing enabled.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        let mut frame = Self::new(width, height);
        frame.hit_grid = Some(HitGrid::new(width, height));
        frame
    }

    /// Frame width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get the bounding rectangle of the frame.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear frame for the next render.
    ///
    /// Resets the buffer, hit grid, cursor and input hint.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(ref mut grid) = self.hit_grid {
            grid.clear();
        }
        self.cursor_position = None;
        self.input_hint = None;
    }

    /// Set cursor position. `None` hides the positioned cursor.
    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }

    /// Set cursor visibility.
    #[inline]
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    /// Publish the keyboard hint for the focused input.
    #[inline]
    pub fn set_input_hint(&mut self, hint: Option<InputHint>) {
        self.input_hint = hint;
    }

    /// Register a hit region (if hit grid is enabled).
    ///
    /// Returns `true` if the region was registered, `false` if no hit grid.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion) -> bool {
        if let Some(ref mut grid) = self.hit_grid {
            #[cfg(feature = "tracing")]
            trace!(id = id.id(), x = rect.x, y = rect.y, w = rect.width, h = rect.height, "hit region");
            grid.register(rect, id, region);
            true
        } else {
            false
        }
    }

    /// Hit test at the given position (if hit grid is enabled).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

impl Draw for Frame {
    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16 {
        self.buffer.print_text(x, y, text, base_cell)
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell) {
        self.buffer.draw_border(rect, chars, base_cell);
    }
}
