use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A phase duration in minutes. May be fractional.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl Minutes {
    pub fn get(self) -> f64 {
        self.0
    }

    /// Horizon of a phase of this length, in seconds.
    pub fn horizon_secs(self) -> f64 {
        self.0 * 60.0
    }

    /// Whether `elapsed_secs` has reached this horizon.
    ///
    /// Compares in minutes: `secs / 60.0` is correctly rounded, so a duration
    /// such as 8.3 that is a whole number of seconds matches on exactly that
    /// tick, where `8.3 * 60.0` would land just above 498.
    pub fn reached_by(self, elapsed_secs: u64) -> bool {
        elapsed_secs as f64 / 60.0 >= self.0
    }
}

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// The focus/rest pair bound once at start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub focus: Minutes,
    pub rest: Minutes,
}

impl Cycle {
    /// Build a cycle, rejecting durations that can never produce a horizon.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDuration`] if either value is not a
    /// finite, strictly positive number.
    pub fn new(focus_min: f64, rest_min: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            focus: validate("focus", focus_min)?,
            rest: validate("rest", rest_min)?,
        })
    }
}

impl Default for Cycle {
    fn default() -> Self {
        Self {
            focus: Minutes(25.0),
            rest: Minutes(5.0),
        }
    }
}

fn validate(field: &'static str, value: f64) -> Result<Minutes, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(Minutes(value))
    } else {
        Err(ValidationError::InvalidDuration { field, value })
    }
}
