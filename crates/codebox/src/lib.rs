#![forbid(unsafe_code)]

//! codebox public facade crate.
//!
//! Re-exports the types an application needs to put a segmented
//! one-time-code entry on screen, plus [`entry::CodeEntry`], a ready-made
//! model that wires the input into the runtime.

pub mod entry;

// --- Core re-exports -------------------------------------------------------

pub use codebox_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    PasteEvent,
};
pub use codebox_core::geometry::{Rect, Sides};
pub use codebox_core::glyph_policy::{GlyphMode, GlyphPolicy};
pub use codebox_core::input_hint::{ContentType, InputHint, KeyboardKind};
pub use codebox_core::reactive::{Observable, Subscription};

// --- Render re-exports -----------------------------------------------------

pub use codebox_render::buffer::Buffer;
pub use codebox_render::cell::{Cell, PackedRgba};
pub use codebox_render::frame::{Frame, HitId, HitRegion};

// --- Style re-exports ------------------------------------------------------

pub use codebox_style::{Style, StyleFlags};

// --- Widget re-exports -----------------------------------------------------

pub use codebox_widgets::{
    BoxState, CodeFilter, EditOutcome, OneTimeCodeInput, RejectReason, Widget, box_state, sanitize,
};

// --- Runtime re-exports ----------------------------------------------------

pub use codebox_runtime::{Cmd, CmdRecord, Model, ProgramSimulator};

pub use entry::{CodeEntry, EntryMsg};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Cmd, CodeEntry, EditOutcome, EntryMsg, Event, Frame, KeyCode, Model, Observable,
        OneTimeCodeInput, Rect, Style, Widget,
    };

    pub use crate::{core, render, runtime, style, widgets};
}

pub use codebox_core as core;
pub use codebox_render as render;
pub use codebox_runtime as runtime;
pub use codebox_style as style;
pub use codebox_widgets as widgets;
