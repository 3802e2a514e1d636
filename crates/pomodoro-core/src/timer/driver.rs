//! Tick driver.
//!
//! Single-threaded run loop: count a second, redraw, and either sleep or stop
//! to ask the user whether to switch phase. The only suspension points are
//! the inter-tick sleep and the blocking read of the answer.

use std::time::Duration;

use chrono::Utc;

use super::confirm::wants_to_continue;
use super::cycle::Cycle;
use super::phase::{PhaseKind, PhaseMachine, PromptKind, Resolution};
use crate::events::{Event, SessionSummary};
use crate::notify::Notifier;

/// Nominal length of one tick.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Terminal side of the loop.
pub trait Console {
    /// Redraw progress. Must not block.
    fn render(&mut self, elapsed_secs: u64, horizon_secs: f64);
    /// Show the confirmation question.
    fn prompt(&mut self, kind: PromptKind);
    /// Block for one line of input. `None` on end of input.
    fn read_line(&mut self) -> Option<String>;
}

pub struct TickDriver<C, N> {
    machine: PhaseMachine,
    console: C,
    notifier: N,
    /// `Duration::ZERO` skips sleeping entirely.
    tick_interval: Duration,
    events: Vec<Event>,
}

impl<C: Console, N: Notifier> TickDriver<C, N> {
    pub fn new(console: C, notifier: N) -> Self {
        Self {
            machine: PhaseMachine::new(),
            console,
            notifier,
            tick_interval: DEFAULT_TICK_INTERVAL,
            events: Vec::new(),
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn machine(&self) -> &PhaseMachine {
        &self.machine
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (C, N, Vec<Event>) {
        (self.console, self.notifier, self.events)
    }

    /// Run focus/rest alternation until the user declines.
    ///
    /// Returns when a confirmation is answered with anything but `Y`. The
    /// machine is left suspended and is never ticked again.
    pub fn run(&mut self, cycle: Cycle) -> SessionSummary {
        let started_at = Utc::now();
        self.machine.start(cycle);
        self.record_phase_started(PhaseKind::Focusing);

        loop {
            self.machine.tick();
            self.console
                .render(self.machine.elapsed_secs(), self.machine.horizon_secs());

            if !self.machine.horizon_reached() {
                if !self.tick_interval.is_zero() {
                    std::thread::sleep(self.tick_interval);
                }
                continue;
            }

            if let Resolution::Stop = self.confirm() {
                break;
            }
        }

        SessionSummary::from_events(&self.events, started_at, Utc::now())
    }

    /// Suspend, notify, prompt, read the answer and resolve.
    fn confirm(&mut self) -> Resolution {
        let finished = self.machine.phase().kind();
        let elapsed_secs = self.machine.elapsed_secs();
        let prompt = self.machine.begin_confirmation();
        if let Some(phase) = finished {
            self.events.push(Event::HorizonReached {
                phase,
                elapsed_secs,
                at: Utc::now(),
            });
        }

        if let Err(e) = self.notifier.notify(prompt.title(), prompt.message()) {
            tracing::debug!(error = %e, "notification dropped");
        }
        self.console.prompt(prompt);

        let line = self.console.read_line();
        let proceed = wants_to_continue(line.as_deref());
        self.events.push(Event::ConfirmationResolved {
            prompt,
            continued: proceed,
            at: Utc::now(),
        });

        let resolution = self.machine.resolve_confirmation(proceed);
        if let Resolution::Continue(next) = resolution {
            self.record_phase_started(next);
        }
        resolution
    }

    fn record_phase_started(&mut self, phase: PhaseKind) {
        self.events.push(Event::PhaseStarted {
            phase,
            duration_min: self.machine.current_duration().get(),
            at: Utc::now(),
        });
    }
}
