#![forbid(unsafe_code)]

//! Cell types: content, colors and style attributes.
//!
//! A [`Cell`] is one terminal column of one row. Content is a single
//! Unicode scalar; codebox only ever draws digits, placeholders and
//! box-drawing glyphs, none of which need grapheme clusters.

use crate::char_width;

/// Cell content: a single char, or empty.
///
/// `EMPTY` is `0`, which is never a printable scalar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell content (no character).
    pub const EMPTY: Self = Self(0);

    /// Create content from a single Unicode character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Extract the character, if any.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Display width with Unicode width semantics.
    #[inline]
    pub fn width(self) -> usize {
        self.as_char().map_or(0, char_width)
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "CellContent::Char({c:?})"),
            None => write!(f, "CellContent::EMPTY"),
        }
    }
}

/// A single terminal cell.
///
/// The default cell is empty with transparent background, white foreground,
/// and no style attributes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character content.
    pub content: CellContent,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Style flags.
    pub attrs: CellAttrs,
}

impl Cell {
    /// Create a new cell with the given content and default colors.
    #[inline]
    pub const fn new(content: CellContent) -> Self {
        Self {
            content,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: CellAttrs::NONE,
        }
    }

    /// Create a cell from a single character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Set the cell content to a character, preserving other fields.
    #[inline]
    pub const fn with_char(mut self, c: char) -> Self {
        self.content = CellContent::from_char(c);
        self
    }

    /// Set the foreground color.
    #[inline]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    /// Set the style attributes.
    #[inline]
    pub const fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellContent::EMPTY)
    }
}

impl core::fmt::Debug for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cell")
            .field("content", &self.content)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("attrs", &self.attrs)
            .finish()
    }
}

/// A compact RGBA color, laid out as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Scale alpha by `opacity`, clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = ((self.a() as f32) * opacity).round().clamp(0.0, 255.0) as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
        /// Hidden / invisible text.
        const HIDDEN        = 0b1000_0000;
    }
}

/// Cell attributes: currently just the style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct CellAttrs(u8);

impl CellAttrs {
    /// No attributes.
    pub const NONE: Self = Self(0);

    /// Create attributes from flags.
    #[inline]
    pub const fn new(flags: StyleFlags) -> Self {
        Self(flags.bits())
    }

    /// Extract the style flags.
    #[inline]
    pub const fn flags(self) -> StyleFlags {
        StyleFlags::from_bits_truncate(self.0)
    }

    /// Return a copy with different style flags.
    #[inline]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self(flags.bits())
    }

    /// Check whether a specific flag is set.
    #[inline]
    pub const fn has_flag(self, flag: StyleFlags) -> bool {
        self.flags().contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.content.as_char(), None);
        assert_eq!(cell.fg, PackedRgba::WHITE);
        assert_eq!(cell.bg, PackedRgba::TRANSPARENT);
        assert_eq!(cell.attrs, CellAttrs::NONE);
    }

    #[test]
    fn from_char_roundtrips_content() {
        let cell = Cell::from_char('7');
        assert_eq!(cell.content.as_char(), Some('7'));
        assert_eq!(cell.content.width(), 1);
        assert_eq!(Cell::from_char('╭').content.width(), 1);
    }

    #[test]
    fn builders_set_fields() {
        let cell = Cell::from_char('-')
            .with_fg(PackedRgba::rgb(128, 128, 128))
            .with_bg(PackedRgba::BLACK)
            .with_attrs(CellAttrs::new(StyleFlags::BOLD))
            .with_char('1');
        assert_eq!(cell.content.as_char(), Some('1'));
        assert_eq!(cell.fg.g(), 128);
        assert_eq!(cell.bg, PackedRgba::BLACK);
        assert!(cell.attrs.has_flag(StyleFlags::BOLD));
    }

    #[test]
    fn attrs_with_flags_replaces() {
        let attrs = CellAttrs::new(StyleFlags::BOLD);
        let swapped = attrs.with_flags(StyleFlags::REVERSE | StyleFlags::DIM);
        assert!(!swapped.has_flag(StyleFlags::BOLD));
        assert!(swapped.has_flag(StyleFlags::REVERSE));
        assert!(swapped.has_flag(StyleFlags::DIM));
    }

    #[test]
    fn opacity_scales_alpha() {
        let c = PackedRgba::rgb(10, 20, 30).with_opacity(0.2);
        assert_eq!(c.a(), 51);
        assert_eq!((c.r(), c.g(), c.b()), (10, 20, 30));
        assert_eq!(PackedRgba::WHITE.with_opacity(3.0).a(), 255);
    }

    proptest! {
        #[test]
        fn rgba_channels_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
            let c = PackedRgba::rgba(r, g, b, a);
            prop_assert_eq!((c.r(), c.g(), c.b(), c.a()), (r, g, b, a));
        }
    }
}
