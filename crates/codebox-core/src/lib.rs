#![forbid(unsafe_code)]

//! Core: input events, geometry, input hints, reactive bindings and glyph policy.

pub mod event;
pub mod geometry;
pub mod glyph_policy;
pub mod input_hint;
pub mod logging;
pub mod reactive;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
