//! # Pomodoro Core Library
//!
//! Core logic for the `pomodoro` command-line timer: alternating focus and
//! rest phases with a user-confirmed checkpoint between them.
//!
//! ## Architecture
//!
//! - **Phase State Machine**: owns the current phase and the elapsed-seconds
//!   counter; knows nothing about clocks or terminals
//! - **Tick Driver**: single-threaded loop that ticks the machine once per
//!   second and talks to the collaborators
//! - **Collaborators**: terminal progress bar and prompt ([`console`]),
//!   desktop notifications ([`notify`])
//! - **Storage**: optional TOML configuration
//!
//! ## Key Components
//!
//! - [`PhaseMachine`]: Phase state machine
//! - [`TickDriver`]: Run loop
//! - [`Config`]: Application configuration

pub mod console;
pub mod error;
pub mod events;
pub mod notify;
pub mod storage;
pub mod timer;

pub use console::{ProgressBar, TerminalConsole};
pub use error::{ConfigError, CoreError, NotifyError, ValidationError};
pub use events::{Event, SessionSummary};
pub use notify::{DesktopNotifier, NoopNotifier, Notifier};
pub use storage::Config;
pub use timer::{
    Cycle, Minutes, Phase, PhaseKind, PhaseMachine, PromptKind, Resolution, TickDriver,
};
