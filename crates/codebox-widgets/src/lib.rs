#![forbid(unsafe_code)]

//! Widgets for codebox: the digit filter and the segmented code input.

pub mod code_filter;
pub mod code_input;

pub use code_filter::{CodeFilter, RejectReason, sanitize};
pub use code_input::{BoxState, EditOutcome, OneTimeCodeInput, box_state};

use codebox_core::geometry::Rect;
use codebox_render::cell::Cell;
use codebox_render::frame::Frame;
use codebox_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Frame`] within a given `Rect`, and
/// may also set the cursor, register hit regions and publish an input hint.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Helper to apply style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    style.apply_to(cell);
}
