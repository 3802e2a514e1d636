//! Property tests for the phase state machine.
//!
//! Covers horizon timing (including decimal minutes typed by a user),
//! duration stability, strict focus/rest alternation and the counter reset on
//! every confirmed transition.

use pomodoro_core::timer::{wants_to_continue, Cycle, PhaseKind, PhaseMachine, Resolution};
use proptest::prelude::*;

fn tick_until_horizon(machine: &mut PhaseMachine) -> u64 {
    let mut ticks = 0;
    loop {
        machine.tick();
        ticks += 1;
        if machine.horizon_reached() {
            return ticks;
        }
    }
}

proptest! {
    #[test]
    fn horizon_reached_exactly_at_minutes_times_sixty(focus in 1u32..=10, rest in 1u32..=10) {
        let mut m = PhaseMachine::new();
        m.start(Cycle::new(f64::from(focus), f64::from(rest)).unwrap());
        let expected = u64::from(focus) * 60;
        for tick in 1..expected {
            m.tick();
            prop_assert!(!m.horizon_reached(), "horizon early at tick {}", tick);
        }
        m.tick();
        prop_assert!(m.horizon_reached());
        prop_assert_eq!(m.elapsed_secs(), expected);
    }

    #[test]
    fn typed_decimal_minutes_prompt_on_first_whole_second(hundredths in 1u64..=6000) {
        // Parse the way the CLI does, e.g. "8.30" -> 8.3 minutes.
        let typed = format!("{}.{:02}", hundredths / 100, hundredths % 100);
        let focus: f64 = typed.parse().unwrap();
        let expected = (hundredths * 60).div_ceil(100);

        let mut m = PhaseMachine::new();
        m.start(Cycle::new(focus, 1.0).unwrap());
        prop_assert_eq!(tick_until_horizon(&mut m), expected, "focus {}", typed);
    }

    #[test]
    fn current_duration_ignores_elapsed(focus in 0.1f64..60.0, ticks in 0usize..200) {
        let mut m = PhaseMachine::new();
        m.start(Cycle::new(focus, 5.0).unwrap());
        let first = m.current_duration();
        for _ in 0..ticks {
            m.tick();
            prop_assert_eq!(m.current_duration(), first);
        }
    }

    #[test]
    fn confirmed_transitions_alternate_and_reset(
        focus in 0.01f64..0.2,
        rest in 0.01f64..0.2,
        rounds in 1usize..12,
    ) {
        let cycle = Cycle::new(focus, rest).unwrap();
        let mut m = PhaseMachine::new();
        m.start(cycle);
        let mut current = PhaseKind::Focusing;

        for _ in 0..rounds {
            tick_until_horizon(&mut m);
            m.begin_confirmation();
            let resolution = m.resolve_confirmation(true);
            let next = current.other();
            prop_assert_eq!(resolution, Resolution::Continue(next));
            prop_assert_eq!(m.phase().kind(), Some(next));
            prop_assert_eq!(m.elapsed_secs(), 0);
            let expected = match next {
                PhaseKind::Focusing => cycle.focus,
                PhaseKind::Resting => cycle.rest,
            };
            prop_assert_eq!(m.current_duration(), expected);
            current = next;
        }
    }

    #[test]
    fn only_a_lone_y_continues(s in "\\PC{0,6}") {
        let expected = s.trim().eq_ignore_ascii_case("y");
        prop_assert_eq!(wants_to_continue(Some(&s)), expected);
    }
}
