#![forbid(unsafe_code)]

//! Glyph policy: Unicode box drawing or ASCII fallbacks.
//!
//! Decisions are deterministic given the environment, so widgets and tests
//! agree on which border characters a terminal gets.
//!
//! | variable                     | values                                   |
//! |------------------------------|------------------------------------------|
//! | `CODEBOX_GLYPH_MODE`         | `unicode` / `ascii`                      |
//! | `CODEBOX_GLYPH_LINE_DRAWING` | `1/0`, `true/false`, `yes/no`, `on/off`  |
//! | `CODEBOX_CJK_WIDTH`          | same booleans; ambiguous glyphs are wide |
//! | `TERM`                       | `dumb`, `linux`, `vt100` imply ASCII     |

use unicode_width::UnicodeWidthChar;

/// Environment variable to override glyph mode (`unicode` or `ascii`).
pub const ENV_GLYPH_MODE: &str = "CODEBOX_GLYPH_MODE";
/// Environment variable to override line drawing support.
pub const ENV_GLYPH_LINE_DRAWING: &str = "CODEBOX_GLYPH_LINE_DRAWING";
/// Environment variable declaring that ambiguous-width glyphs render wide.
pub const ENV_CJK_WIDTH: &str = "CODEBOX_CJK_WIDTH";

/// Overall glyph rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Use Unicode glyphs (rounded box drawing).
    #[default]
    Unicode,
    /// Use ASCII-only fallbacks.
    Ascii,
}

impl GlyphMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unicode" | "uni" | "u" => Some(Self::Unicode),
            "ascii" | "ansi" | "a" => Some(Self::Ascii),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }
}

/// Glyph capability policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPolicy {
    /// Overall glyph mode.
    pub mode: GlyphMode,
    /// Whether ambiguous-width glyphs are treated as double-width.
    pub cjk_width: bool,
    /// Whether Unicode line drawing should be used for borders.
    pub unicode_line_drawing: bool,
}

impl Default for GlyphPolicy {
    fn default() -> Self {
        Self::unicode()
    }
}

impl GlyphPolicy {
    /// Full Unicode policy, independent of the environment.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            mode: GlyphMode::Unicode,
            cjk_width: false,
            unicode_line_drawing: true,
        }
    }

    /// ASCII-only policy, independent of the environment.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            mode: GlyphMode::Ascii,
            cjk_width: false,
            unicode_line_drawing: false,
        }
    }

    /// Detect policy from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Detect policy using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = detect_mode(&get_env);
        let cjk_width = env_override_bool(&get_env, ENV_CJK_WIDTH).unwrap_or(false);

        let mut unicode_line_drawing = mode == GlyphMode::Unicode;
        if let Some(value) = env_override_bool(&get_env, ENV_GLYPH_LINE_DRAWING) {
            unicode_line_drawing = value;
        }
        if mode == GlyphMode::Ascii {
            unicode_line_drawing = false;
        }
        if unicode_line_drawing && !glyphs_fit_narrow(LINE_DRAWING_GLYPHS, cjk_width) {
            unicode_line_drawing = false;
        }

        let policy = Self {
            mode,
            cjk_width,
            unicode_line_drawing,
        };
        crate::debug!(
            glyph_mode = policy.mode.as_str(),
            line_drawing = policy.unicode_line_drawing,
            "glyph policy detected"
        );
        policy
    }
}

const LINE_DRAWING_GLYPHS: &[char] = &['─', '│', '╭', '╮', '╯', '╰'];

fn detect_mode<F>(get_env: &F) -> GlyphMode
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = get_env(ENV_GLYPH_MODE)
        && let Some(parsed) = GlyphMode::parse(&value)
    {
        return parsed;
    }

    match get_env("TERM").as_deref().map(str::trim) {
        Some("dumb" | "linux" | "vt100" | "vt52") => GlyphMode::Ascii,
        _ => GlyphMode::Unicode,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_override_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| parse_bool(&value))
}

fn glyph_width(ch: char, cjk_width: bool) -> usize {
    if cjk_width {
        ch.width_cjk().unwrap_or(0)
    } else {
        ch.width().unwrap_or(0)
    }
}

fn glyphs_fit_narrow(glyphs: &[char], cjk_width: bool) -> bool {
    glyphs
        .iter()
        .all(|&glyph| glyph_width(glyph, cjk_width) == 1)
}
