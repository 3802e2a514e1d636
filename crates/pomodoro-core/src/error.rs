//! Core error types for pomodoro-core.
//!
//! Only recoverable conditions live here: bad user input and unreadable
//! configuration. Phase contract violations are bugs in the driver and
//! panic instead (see [`crate::timer::PhaseMachine`]).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomodoro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Duration is zero, negative, NaN or infinite
    #[error("Invalid {field} duration: {value} (expected a positive number of minutes)")]
    InvalidDuration { field: &'static str, value: f64 },

    /// Tick interval of zero would spin the loop
    #[error("Invalid tick interval: must be at least 1 ms")]
    ZeroTickInterval,

    /// Progress bar needs at least one cell
    #[error("Invalid bar width: must be at least 1")]
    ZeroBarWidth,
}

/// Desktop notification dispatch failure.
///
/// The driver logs and drops these; they never alter phase transitions.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification dispatch failed: {0}")]
    Dispatch(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
