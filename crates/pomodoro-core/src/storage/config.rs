//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default focus and rest durations
//! - Tick interval
//! - Notification preference
//! - Progress bar width
//!
//! Configuration is read from `~/.config/pomodoro/config.toml`. The file is
//! optional and never written by the timer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::config_dir;
use crate::console::DEFAULT_BAR_WIDTH;
use crate::error::{ConfigError, ValidationError};
use crate::timer::Cycle;

/// Timer defaults, overridable from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: f64,
    #[serde(default = "default_rest_minutes")]
    pub rest_minutes: f64,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_focus_minutes() -> f64 {
    25.0
}
fn default_rest_minutes() -> f64 {
    5.0
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}
fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            rest_minutes: default_rest_minutes(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Bind the focus/rest pair. Explicit values win over the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting durations are not positive.
    pub fn cycle(&self, focus: Option<f64>, rest: Option<f64>) -> Result<Cycle, ValidationError> {
        Cycle::new(
            focus.unwrap_or(self.timer.focus_minutes),
            rest.unwrap_or(self.timer.rest_minutes),
        )
    }

    /// # Errors
    ///
    /// Returns an error if the configured interval is zero.
    pub fn tick_interval(&self) -> Result<Duration, ValidationError> {
        match self.timer.tick_interval_ms {
            0 => Err(ValidationError::ZeroTickInterval),
            ms => Ok(Duration::from_millis(ms)),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the configured width is zero.
    pub fn bar_width(&self) -> Result<usize, ValidationError> {
        match self.ui.bar_width {
            0 => Err(ValidationError::ZeroBarWidth),
            w => Ok(w),
        }
    }
}
