#![forbid(unsafe_code)]

//! Elm-style model/command contract.
//!
//! A [`Model`] owns application state, turns messages into new state plus a
//! [`Cmd`], and renders itself into a [`Frame`]. Commands describe side
//! effects; the driver (for tests, [`ProgramSimulator`]) executes them.
//!
//! # Deferred messages
//!
//! [`Cmd::Defer`] queues a message for delivery after the next render pass
//! completes. A widget that must react "right after it first appears" (for
//! example to take focus once its layout exists) returns a deferred message
//! from `init` instead of acting inside it.
//!
//! # Example
//!
//! ```
//! use codebox_core::event::Event;
//! use codebox_render::frame::Frame;
//! use codebox_runtime::program::{Cmd, Model};
//!
//! struct Shown {
//!     visible: bool,
//! }
//!
//! enum Msg {
//!     Appeared,
//!     Event(Event),
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         Msg::Event(event)
//!     }
//! }
//!
//! impl Model for Shown {
//!     type Message = Msg;
//!
//!     fn init(&mut self) -> Cmd<Msg> {
//!         Cmd::defer(Msg::Appeared)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         if let Msg::Appeared = msg {
//!             self.visible = true;
//!         }
//!         Cmd::none()
//!     }
//!
//!     fn view(&self, _frame: &mut Frame) {}
//! }
//! ```
//!
//! [`ProgramSimulator`]: crate::simulator::ProgramSimulator

use codebox_core::event::Event;
use codebox_render::frame::Frame;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Commands returned from `init` and `update`.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands as a batch (currently sequential).
    Batch(Vec<Cmd<M>>),
    /// Execute commands sequentially.
    Sequence(Vec<Cmd<M>>),
    /// Send a message to the model immediately.
    Msg(M),
    /// Send a message to the model after the next render pass completes.
    Defer(M),
    /// Write a log line to the host's log output.
    Log(String),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Sequence(cmds) => f.debug_tuple("Sequence").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Defer(m) => f.debug_tuple("Defer").field(m).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a command delivering `m` after the next render pass.
    #[inline]
    pub fn defer(m: M) -> Self {
        Self::Defer(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch of commands, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        Self::collapse(cmds, Self::Batch)
    }

    /// Create a sequence of commands, collapsing trivial cases.
    pub fn sequence(cmds: Vec<Self>) -> Self {
        Self::collapse(cmds, Self::Sequence)
    }

    fn collapse(mut cmds: Vec<Self>, wrap: fn(Vec<Self>) -> Self) -> Self {
        cmds.retain(|cmd| !cmd.is_none());
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => wrap(cmds),
        }
    }

    /// Whether this is [`Cmd::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Return a stable name for tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Batch(_) => "Batch",
            Self::Sequence(_) => "Sequence",
            Self::Msg(_) => "Msg",
            Self::Defer(_) => "Defer",
            Self::Log(_) => "Log",
        }
    }

    /// Transform the message type.
    pub fn map<N>(self, f: impl Fn(M) -> N + Copy) -> Cmd<N> {
        match self {
            Self::None => Cmd::None,
            Self::Quit => Cmd::Quit,
            Self::Batch(cmds) => Cmd::Batch(cmds.into_iter().map(|c| c.map(f)).collect()),
            Self::Sequence(cmds) => Cmd::Sequence(cmds.into_iter().map(|c| c.map(f)).collect()),
            Self::Msg(m) => Cmd::Msg(f(m)),
            Self::Defer(m) => Cmd::Defer(f(m)),
            Self::Log(s) => Cmd::Log(s),
        }
    }
}
