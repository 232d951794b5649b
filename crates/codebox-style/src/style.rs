#![forbid(unsafe_code)]

//! Partial cell styles.
//!
//! A [`Style`] only carries what it sets: unset fields leave the cell
//! underneath untouched, and [`Style::patch`] layers one style over another.
//!
//! ```
//! use codebox_style::{PackedRgba, Style, StyleFlags};
//!
//! let base = Style::new().fg(PackedRgba::WHITE);
//! let digit = base.patch(Style::new().bold());
//! assert_eq!(digit.fg, Some(PackedRgba::WHITE));
//! assert!(digit.has_attr(StyleFlags::BOLD));
//! ```

use codebox_render::cell::{Cell, PackedRgba, StyleFlags};

/// Foreground, background and attribute overrides for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Attribute flags, if set. Replaces the cell's flags when applied.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[inline]
    #[must_use]
    pub fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flags);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.attrs(StyleFlags::REVERSE)
    }

    /// Whether the style sets nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Whether the style sets `flag`.
    #[inline]
    pub fn has_attr(&self, flag: StyleFlags) -> bool {
        self.attrs.is_some_and(|attrs| attrs.contains(flag))
    }

    /// Layer `other` on top of `self`.
    ///
    /// Colors set in `other` win; attribute flags are unioned.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        let attrs = match (self.attrs, other.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs,
        }
    }

    /// Apply the set fields to a cell, keeping its content.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = cell.attrs.with_flags(attrs);
        }
    }
}
