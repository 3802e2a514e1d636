use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{PhaseKind, PromptKind};

/// Every phase transition the driver performs produces an Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PhaseStarted {
        phase: PhaseKind,
        duration_min: f64,
        at: DateTime<Utc>,
    },
    /// Counter met the horizon; the driver is about to prompt.
    HorizonReached {
        phase: PhaseKind,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    ConfirmationResolved {
        prompt: PromptKind,
        continued: bool,
        at: DateTime<Utc>,
    },
}

/// What happened during one run of the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub focus_completed: u32,
    pub rest_completed: u32,
    /// Seconds counted across all completed phases.
    pub total_elapsed_secs: u64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Fold an event log into a summary.
    pub fn from_events(
        events: &[Event],
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        let mut summary = Self {
            focus_completed: 0,
            rest_completed: 0,
            total_elapsed_secs: 0,
            started_at,
            ended_at,
        };
        for event in events {
            if let Event::HorizonReached {
                phase,
                elapsed_secs,
                ..
            } = event
            {
                summary.total_elapsed_secs += elapsed_secs;
                match phase {
                    PhaseKind::Focusing => summary.focus_completed += 1,
                    PhaseKind::Resting => summary.rest_completed += 1,
                }
            }
        }
        summary
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mins = self.total_elapsed_secs / 60;
        let secs = self.total_elapsed_secs % 60;
        write!(
            f,
            "Completed {} focus and {} rest phase(s) in {}m{:02}s",
            self.focus_completed, self.rest_completed, mins, secs
        )
    }
}
