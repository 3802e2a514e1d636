mod confirm;
mod cycle;
mod driver;
mod phase;

pub use confirm::wants_to_continue;
pub use cycle::{Cycle, Minutes};
pub use driver::{Console, TickDriver, DEFAULT_TICK_INTERVAL};
pub use phase::{Phase, PhaseKind, PhaseMachine, PromptKind, Resolution};
