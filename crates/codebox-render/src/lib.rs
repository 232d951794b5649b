#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, border drawing and frames.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod frame;

use unicode_width::UnicodeWidthChar;

/// Display width of a single char; control characters count as zero.
#[inline]
pub(crate) fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return match ch {
            ' '..='~' => 1,
            _ => 0,
        };
    }
    ch.width().unwrap_or(0)
}
