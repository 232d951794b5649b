#![forbid(unsafe_code)]

//! Drawing primitives for the buffer.
//!
//! Border and text helpers on top of [`Buffer::set`], so widgets don't
//! repeat low-level cell loops. Everything is clipped to the buffer.

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent};
use crate::char_width;
use codebox_core::geometry::Rect;
use codebox_core::glyph_policy::GlyphPolicy;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Simple box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// ASCII-only border.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Rounded corners, or ASCII when the policy rules out line drawing.
    #[must_use]
    pub const fn for_policy(policy: GlyphPolicy) -> Self {
        if policy.unicode_line_drawing {
            Self::ROUNDED
        } else {
            Self::ASCII
        }
    }
}

/// Extension trait for drawing on a Buffer.
pub trait Draw {
    /// Print text at the given coordinates using the cell's colors/attrs.
    ///
    /// Characters replace the cell content; fg/bg/attrs come from `base_cell`.
    /// Zero-width characters are skipped. Returns the x position after the
    /// last character.
    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16;

    /// Draw a border around a rectangle using the given characters.
    ///
    /// The border is drawn inside the rectangle (edges + corners).
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell);
}

impl Draw for Buffer {
    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16 {
        let max_x = self.width();
        let mut cx = x;
        for c in text.chars() {
            let width = char_width(c) as u16;
            if width == 0 {
                continue;
            }
            if cx.saturating_add(width) > max_x {
                break;
            }
            self.set(cx, y, base_cell.with_char(c));
            cx = cx.saturating_add(width);
        }
        cx
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell) {
        if rect.is_empty() {
            return;
        }

        let make_cell = |c: char| Cell {
            content: CellContent::from_char(c),
            ..base_cell
        };
        let h_cell = make_cell(chars.horizontal);
        let v_cell = make_cell(chars.vertical);
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        for x in left..=right {
            self.set(x, top, h_cell);
            self.set(x, bottom, h_cell);
        }
        for y in top.saturating_add(1)..bottom {
            self.set(left, y, v_cell);
            self.set(right, y, v_cell);
        }

        // Corners last so they win over the edges.
        self.set(left, top, make_cell(chars.top_left));
        self.set(right, top, make_cell(chars.top_right));
        self.set(left, bottom, make_cell(chars.bottom_left));
        self.set(right, bottom, make_cell(chars.bottom_right));
    }
}
