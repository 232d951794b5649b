#![forbid(unsafe_code)]

//! Text-input hints for hosts with an on-screen keyboard.
//!
//! A terminal ignores these. Web and mobile hosts read the hint published
//! on the frame to pick a keyboard layout and enable autofill sources such
//! as SMS one-time codes.

/// Keyboard layout a host should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardKind {
    /// The platform's default text keyboard.
    #[default]
    Text,
    /// Digits only.
    NumberPad,
}

/// Semantic content of the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// No particular content.
    #[default]
    Unspecified,
    /// A one-time passcode; hosts may offer autofill from SMS or mail.
    OneTimeCode,
}

/// Keyboard and content hint for the focused input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputHint {
    pub keyboard: KeyboardKind,
    pub content: ContentType,
}

impl InputHint {
    /// Numeric keypad with one-time-code autofill.
    #[must_use]
    pub const fn one_time_code() -> Self {
        Self {
            keyboard: KeyboardKind::NumberPad,
            content: ContentType::OneTimeCode,
        }
    }

    /// Whether the host should show a digits-only keyboard.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.keyboard, KeyboardKind::NumberPad)
    }
}
