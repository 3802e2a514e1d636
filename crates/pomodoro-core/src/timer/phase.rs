//! Phase state machine.
//!
//! The machine has no clock of its own - the driver calls `tick()` once per
//! elapsed second and asks whether the horizon has been reached.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> Focusing -> AwaitingConfirmation -> Resting
//!                  ^                                    |
//!                  +------ AwaitingConfirmation <-------+
//! ```
//!
//! Operations called in a phase that forbids them panic. That can only happen
//! if the driver is wrong, so there is nothing to recover.
//!
//! ## Usage
//!
//! ```
//! use pomodoro_core::timer::{Cycle, PhaseMachine, PromptKind, Resolution, PhaseKind};
//!
//! let mut machine = PhaseMachine::new();
//! machine.start(Cycle::new(0.02, 0.02).unwrap());
//! machine.tick();
//! machine.tick();
//! assert!(machine.horizon_reached());
//! assert_eq!(machine.begin_confirmation(), PromptKind::TakeBreak);
//! assert_eq!(machine.resolve_confirmation(true), Resolution::Continue(PhaseKind::Resting));
//! assert_eq!(machine.elapsed_secs(), 0);
//! ```

use serde::{Deserialize, Serialize};

use super::cycle::{Cycle, Minutes};

/// The two counting phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Focusing,
    Resting,
}

impl PhaseKind {
    pub fn other(self) -> Self {
        match self {
            PhaseKind::Focusing => PhaseKind::Resting,
            PhaseKind::Resting => PhaseKind::Focusing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// No durations bound yet.
    NotStarted,
    Focusing { duration: Minutes },
    Resting { duration: Minutes },
    /// Suspended until the user answers; remembers what it interrupted.
    AwaitingConfirmation { interrupted: PhaseKind },
}

impl Phase {
    fn counting(kind: PhaseKind, cycle: Cycle) -> Self {
        match kind {
            PhaseKind::Focusing => Phase::Focusing {
                duration: cycle.focus,
            },
            PhaseKind::Resting => Phase::Resting {
                duration: cycle.rest,
            },
        }
    }

    /// The counting phase this is, if any.
    pub fn kind(&self) -> Option<PhaseKind> {
        match self {
            Phase::Focusing { .. } => Some(PhaseKind::Focusing),
            Phase::Resting { .. } => Some(PhaseKind::Resting),
            Phase::NotStarted | Phase::AwaitingConfirmation { .. } => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "NotStarted",
            Phase::Focusing { .. } => "Focusing",
            Phase::Resting { .. } => "Resting",
            Phase::AwaitingConfirmation { .. } => "AwaitingConfirmation",
        }
    }
}

/// Which message to show when a counting phase ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Leaving `Focusing`.
    TakeBreak,
    /// Leaving `Resting`.
    BackToWork,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::TakeBreak => "Focus complete",
            PromptKind::BackToWork => "Break over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PromptKind::TakeBreak => "Let's take a break!",
            PromptKind::BackToWork => "Back to work!",
        }
    }

    /// Text shown on the terminal while waiting for the answer.
    pub fn prompt_text(self) -> String {
        format!("{}\nPress 'Y' to continue.", self.message())
    }
}

/// Outcome of answering a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Now counting in the given phase with a fresh counter.
    Continue(PhaseKind),
    /// The driver must stop ticking.
    Stop,
}

/// Owns the current phase and the elapsed-seconds counter.
#[derive(Debug, Clone)]
pub struct PhaseMachine {
    phase: Phase,
    /// Bound by `start()`; `None` only while `NotStarted`.
    cycle: Option<Cycle>,
    /// Whole seconds counted in the current focus/rest phase.
    elapsed_secs: u64,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            cycle: None,
            elapsed_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Bound minutes of the active counting phase.
    ///
    /// Panics outside `Focusing`/`Resting`.
    pub fn current_duration(&self) -> Minutes {
        match self.phase {
            Phase::Focusing { duration } | Phase::Resting { duration } => duration,
            other => contract_violation("current_duration", &other),
        }
    }

    pub fn horizon_secs(&self) -> f64 {
        self.current_duration().horizon_secs()
    }

    /// `elapsed >= duration * 60`. The boundary tick itself counts.
    pub fn horizon_reached(&self) -> bool {
        match self.phase {
            Phase::Focusing { duration } | Phase::Resting { duration } => {
                duration.reached_by(self.elapsed_secs)
            }
            other => contract_violation("horizon_reached", &other),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, cycle: Cycle) {
        if self.phase != Phase::NotStarted {
            contract_violation("start", &self.phase);
        }
        self.cycle = Some(cycle);
        self.enter(PhaseKind::Focusing);
    }

    /// Count one second.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Focusing { .. } | Phase::Resting { .. } => {
                self.elapsed_secs = self.elapsed_secs.saturating_add(1);
                tracing::trace!(elapsed_secs = self.elapsed_secs, "tick");
            }
            other => contract_violation("tick", &other),
        }
    }

    /// Suspend the counting phase and report which prompt to show.
    pub fn begin_confirmation(&mut self) -> PromptKind {
        let Some(interrupted) = self.phase.kind() else {
            contract_violation("begin_confirmation", &self.phase);
        };
        self.phase = Phase::AwaitingConfirmation { interrupted };
        tracing::debug!(?interrupted, elapsed_secs = self.elapsed_secs, "awaiting confirmation");
        match interrupted {
            PhaseKind::Focusing => PromptKind::TakeBreak,
            PhaseKind::Resting => PromptKind::BackToWork,
        }
    }

    /// Answer a pending confirmation.
    ///
    /// On `true` the machine switches to the other phase with its bound
    /// duration and a zeroed counter. On `false` it stays suspended; any later
    /// `tick()` is a contract violation.
    pub fn resolve_confirmation(&mut self, proceed: bool) -> Resolution {
        let Phase::AwaitingConfirmation { interrupted } = self.phase else {
            contract_violation("resolve_confirmation", &self.phase);
        };
        if !proceed {
            tracing::debug!(?interrupted, "user declined to continue");
            return Resolution::Stop;
        }
        let next = interrupted.other();
        self.enter(next);
        Resolution::Continue(next)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn enter(&mut self, kind: PhaseKind) {
        let Some(cycle) = self.cycle else {
            contract_violation("enter", &self.phase);
        };
        self.phase = Phase::counting(kind, cycle);
        self.elapsed_secs = 0;
        tracing::debug!(phase = ?self.phase, "phase started");
    }
}

#[cold]
#[track_caller]
fn contract_violation(operation: &str, phase: &Phase) -> ! {
    panic!(
        "PhaseMachine::{operation} called while phase is {}; the tick driver broke its contract",
        phase.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(focus: f64, rest: f64) -> PhaseMachine {
        let mut m = PhaseMachine::new();
        m.start(Cycle::new(focus, rest).unwrap());
        m
    }

    #[test]
    fn start_enters_focusing_with_zero_counter() {
        let m = started(25.0, 5.0);
        assert_eq!(
            m.phase(),
            Phase::Focusing {
                duration: Minutes(25.0)
            }
        );
        assert_eq!(m.elapsed_secs(), 0);
        assert_eq!(m.current_duration(), Minutes(25.0));
    }

    #[test]
    fn horizon_fires_on_exact_boundary_tick() {
        let mut m = started(1.0, 1.0);
        for _ in 0..59 {
            m.tick();
            assert!(!m.horizon_reached());
        }
        m.tick();
        assert!(m.horizon_reached());
        assert_eq!(m.elapsed_secs(), 60);
    }

    #[test]
    fn fractional_horizon_rounds_up_to_next_tick() {
        let mut m = started(0.02, 0.02);
        m.tick();
        assert!(!m.horizon_reached());
        m.tick();
        assert!(m.horizon_reached());
        assert_eq!(m.begin_confirmation(), PromptKind::TakeBreak);
        assert_eq!(
            m.resolve_confirmation(true),
            Resolution::Continue(PhaseKind::Resting)
        );
        assert_eq!(
            m.phase(),
            Phase::Resting {
                duration: Minutes(0.02)
            }
        );
        assert_eq!(m.elapsed_secs(), 0);
    }

    #[test]
    fn current_duration_is_stable_while_counting() {
        let mut m = started(3.0, 1.0);
        let before = m.current_duration();
        for _ in 0..42 {
            m.tick();
        }
        assert_eq!(m.current_duration(), before);
    }

    #[test]
    fn resting_leads_back_to_focus() {
        let mut m = started(0.01, 0.01);
        m.tick();
        m.begin_confirmation();
        m.resolve_confirmation(true);
        m.tick();
        assert_eq!(m.begin_confirmation(), PromptKind::BackToWork);
        assert_eq!(
            m.resolve_confirmation(true),
            Resolution::Continue(PhaseKind::Focusing)
        );
        assert_eq!(m.current_duration(), Minutes(0.01));
    }

    #[test]
    fn decline_keeps_machine_suspended() {
        let mut m = started(0.01, 0.01);
        m.tick();
        m.begin_confirmation();
        assert_eq!(m.resolve_confirmation(false), Resolution::Stop);
        assert_eq!(
            m.phase(),
            Phase::AwaitingConfirmation {
                interrupted: PhaseKind::Focusing
            }
        );
    }

    #[test]
    fn decimal_focus_prompts_on_exact_second() {
        let mut m = started(8.3, 5.0);
        for _ in 0..497 {
            m.tick();
        }
        assert!(!m.horizon_reached());
        m.tick();
        assert_eq!(m.elapsed_secs(), 498);
        assert!(m.horizon_reached());
    }

    #[test]
    fn prompt_text_asks_for_y() {
        assert_eq!(
            PromptKind::TakeBreak.prompt_text(),
            "Let's take a break!\nPress 'Y' to continue."
        );
        assert!(PromptKind::BackToWork.prompt_text().starts_with("Back to work!"));
    }

    #[test]
    #[should_panic(expected = "tick called while phase is NotStarted")]
    fn tick_before_start_panics() {
        PhaseMachine::new().tick();
    }

    #[test]
    #[should_panic(expected = "start called while phase is Focusing")]
    fn second_start_panics() {
        let mut m = started(25.0, 5.0);
        m.start(Cycle::default());
    }

    #[test]
    #[should_panic(expected = "tick called while phase is AwaitingConfirmation")]
    fn tick_after_decline_panics() {
        let mut m = started(0.01, 0.01);
        m.tick();
        m.begin_confirmation();
        m.resolve_confirmation(false);
        m.tick();
    }

    #[test]
    #[should_panic(expected = "horizon_reached called while phase is AwaitingConfirmation")]
    fn horizon_query_while_suspended_panics() {
        let mut m = started(0.01, 0.01);
        m.tick();
        m.begin_confirmation();
        m.horizon_reached();
    }

    #[test]
    #[should_panic(expected = "current_duration called while phase is NotStarted")]
    fn current_duration_before_start_panics() {
        PhaseMachine::new().current_duration();
    }

    #[test]
    #[should_panic(expected = "resolve_confirmation called while phase is Focusing")]
    fn resolve_without_prompt_panics() {
        started(25.0, 5.0).resolve_confirmation(true);
    }

    #[test]
    #[should_panic(expected = "begin_confirmation called while phase is AwaitingConfirmation")]
    fn double_confirmation_panics() {
        let mut m = started(0.01, 0.01);
        m.tick();
        m.begin_confirmation();
        m.begin_confirmation();
    }
}
