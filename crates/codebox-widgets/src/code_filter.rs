#![forbid(unsafe_code)]

//! Digit filter for one-time codes.
//!
//! Every raw edit goes through [`CodeFilter`] before it touches the code
//! value. The filter keeps ASCII digits in their original order and then
//! applies an all-or-nothing length cap: an edit that would leave more than
//! `capacity` digits is rejected whole, never clipped.
//!
//! ```
//! use codebox_widgets::code_filter::{CodeFilter, RejectReason};
//!
//! let filter = CodeFilter::new(4);
//! assert_eq!(filter.accept("1a2-3"), Ok("123".to_string()));
//! assert_eq!(
//!     filter.accept("12345"),
//!     Err(RejectReason::TooLong { digits: 5, capacity: 4 })
//! );
//! assert_eq!(filter.apply("12", "12345"), "12");
//! ```

use std::fmt;

/// Keep only the ASCII digits of `raw`, in order.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Why an edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The edit carried more digits than the code has boxes.
    TooLong {
        /// Digits left after sanitizing.
        digits: usize,
        /// Number of boxes.
        capacity: usize,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { digits, capacity } => {
                write!(f, "{digits} digits do not fit a {capacity}-digit code")
            }
        }
    }
}

impl std::error::Error for RejectReason {}

/// Sanitize-then-cap filter for a code of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFilter {
    capacity: usize,
}

impl CodeFilter {
    /// A filter for codes of exactly `capacity` digits.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Number of digits a complete code has.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sanitize `proposed` and check it against the capacity.
    pub fn accept(&self, proposed: &str) -> Result<String, RejectReason> {
        let digits = sanitize(proposed);
        // Sanitized values are ASCII, so byte length is the digit count.
        if digits.len() > self.capacity {
            return Err(RejectReason::TooLong {
                digits: digits.len(),
                capacity: self.capacity,
            });
        }
        Ok(digits)
    }

    /// The value after proposing `proposed` over `previous`.
    ///
    /// A rejected edit yields `previous` unchanged.
    #[must_use]
    pub fn apply(&self, previous: &str, proposed: &str) -> String {
        self.accept(proposed)
            .unwrap_or_else(|_| previous.to_owned())
    }

    /// Whether `value` fills every box.
    #[inline]
    #[must_use]
    pub fn is_complete(&self, value: &str) -> bool {
        value.chars().count() == self.capacity
    }

    /// Whether going from `before` to `after` is the edit that completes
    /// the code.
    ///
    /// Never true for a zero-capacity filter.
    #[must_use]
    pub fn completes(&self, before: &str, after: &str) -> bool {
        before.chars().count() < self.capacity && self.is_complete(after)
    }
}
