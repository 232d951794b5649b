#![forbid(unsafe_code)]

//! Deterministic program simulator for testing.
//!
//! `ProgramSimulator` runs a [`Model`] without a real terminal, enabling
//! deterministic frame capture and event injection.
//!
//! A render pass is [`capture_frame`](ProgramSimulator::capture_frame):
//! it calls `view` into a fresh frame with hit testing enabled, stores the
//! frame, and then delivers every message queued by [`Cmd::Defer`] before
//! that pass. Messages deferred while delivering wait for the next pass.
//!
//! # Example
//!
//! ```
//! use codebox_core::event::Event;
//! use codebox_render::frame::Frame;
//! use codebox_runtime::program::{Cmd, Model};
//! use codebox_runtime::simulator::ProgramSimulator;
//!
//! #[derive(Default)]
//! struct Mount {
//!     shown: bool,
//! }
//!
//! enum Msg {
//!     Shown,
//!     Event,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(_: Event) -> Self {
//!         Msg::Event
//!     }
//! }
//!
//! impl Model for Mount {
//!     type Message = Msg;
//!
//!     fn init(&mut self) -> Cmd<Msg> {
//!         Cmd::defer(Msg::Shown)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Shown => {
//!                 self.shown = true;
//!                 Cmd::log("shown")
//!             }
//!             Msg::Event => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, _frame: &mut Frame) {}
//! }
//!
//! let mut sim = ProgramSimulator::new(Mount::default());
//! sim.init();
//! assert!(!sim.model().shown);
//! assert_eq!(sim.pending_deferred(), 1);
//!
//! sim.capture_frame(10, 2);
//! assert!(sim.model().shown);
//! assert_eq!(sim.logs(), ["shown"]);
//! ```

use crate::program::{Cmd, Model};
use codebox_core::event::Event;
use codebox_render::frame::Frame;
use std::collections::VecDeque;
use tracing::debug;

/// Record of a command that was executed during simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdRecord {
    /// No-op command.
    None,
    /// Quit command.
    Quit,
    /// Message sent to model (not stored, just noted).
    Msg,
    /// Batch of commands.
    Batch(usize),
    /// Sequence of commands.
    Sequence(usize),
    /// Message queued until after the next render.
    Defer,
    /// Deferred message delivered after a render.
    Deferred,
    /// Log message emitted.
    Log(String),
}

/// Deterministic simulator for [`Model`] testing.
pub struct ProgramSimulator<M: Model> {
    /// The application model.
    model: M,
    /// Captured frames.
    frames: Vec<Frame>,
    /// Record of all executed commands.
    command_log: Vec<CmdRecord>,
    /// Whether the simulated program is still running.
    running: bool,
    /// Log messages emitted via Cmd::Log.
    logs: Vec<String>,
    /// Messages waiting for the next render pass.
    deferred: VecDeque<M::Message>,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    ///
    /// The model is not initialized until [`init`](Self::init) is called.
    pub fn new(model: M) -> Self {
        Self {
            model,
            frames: Vec::new(),
            command_log: Vec::new(),
            running: true,
            logs: Vec::new(),
            deferred: VecDeque::new(),
        }
    }

    /// Initialize the model by calling `Model::init()` and executing returned commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Inject terminal events into the model.
    ///
    /// Each event is converted to a message via `From<Event>` and dispatched
    /// through `Model::update()`.
    pub fn inject_events(&mut self, events: &[Event]) {
        for event in events {
            if !self.running {
                break;
            }
            let msg = M::Message::from(event.clone());
            let cmd = self.model.update(msg);
            self.execute_cmd(cmd);
        }
    }

    /// Inject a single terminal event into the model.
    pub fn inject_event(&mut self, event: Event) {
        self.inject_events(&[event]);
    }

    /// Send a specific message to the model.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Run one render pass at the given dimensions.
    ///
    /// Renders into a fresh frame with a hit grid, stores it, then delivers
    /// the messages deferred before this pass. Returns the captured frame.
    pub fn capture_frame(&mut self, width: u16, height: u16) -> &Frame {
        let mut frame = Frame::with_hit_grid(width, height);
        self.model.view(&mut frame);
        self.frames.push(frame);
        self.deliver_deferred();
        &self.frames[self.frames.len() - 1]
    }

    fn deliver_deferred(&mut self) {
        let pending = std::mem::take(&mut self.deferred);
        if !pending.is_empty() {
            debug!(count = pending.len(), "delivering deferred messages");
        }
        for msg in pending {
            if !self.running {
                break;
            }
            self.command_log.push(CmdRecord::Deferred);
            let cmd = self.model.update(msg);
            self.execute_cmd(cmd);
        }
    }

    /// Get all captured frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get the most recently captured frame, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Get the number of captured frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of messages waiting for the next render pass.
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Check if the simulated program is still running.
    ///
    /// Returns `false` after a `Cmd::Quit` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get all log messages emitted via `Cmd::Log`.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Get the command execution log.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// Clear all captured frames.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// Clear all logs.
    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    /// Execute a command without IO.
    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {
                self.command_log.push(CmdRecord::None);
            }
            Cmd::Quit => {
                self.running = false;
                self.command_log.push(CmdRecord::Quit);
            }
            Cmd::Msg(m) => {
                self.command_log.push(CmdRecord::Msg);
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Defer(m) => {
                self.command_log.push(CmdRecord::Defer);
                self.deferred.push_back(m);
            }
            Cmd::Batch(cmds) => {
                self.command_log.push(CmdRecord::Batch(cmds.len()));
                self.execute_all(cmds);
            }
            Cmd::Sequence(cmds) => {
                self.command_log.push(CmdRecord::Sequence(cmds.len()));
                self.execute_all(cmds);
            }
            Cmd::Log(text) => {
                self.command_log.push(CmdRecord::Log(text.clone()));
                self.logs.push(text);
            }
        }
    }

    fn execute_all(&mut self, cmds: Vec<Cmd<M::Message>>) {
        for c in cmds {
            self.execute_cmd(c);
            if !self.running {
                break;
            }
        }
    }
}
