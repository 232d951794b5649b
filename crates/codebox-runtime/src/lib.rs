#![forbid(unsafe_code)]

//! Elm-style runtime contract and a deterministic simulator for codebox models.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model};
pub use simulator::{CmdRecord, ProgramSimulator};
