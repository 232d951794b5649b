#![forbid(unsafe_code)]

//! Style types for codebox.

pub mod style;

pub use codebox_render::cell::{PackedRgba, StyleFlags};
pub use style::Style;
