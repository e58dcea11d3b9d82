//! Start/stop/reset state machine
//!
//! The state machine is explicit, finite, and deterministic. Side effects
//! (clearing windows, zeroing the counter) are described by the
//! [`Event`] and carried out by the stopwatch controller.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Phase, StopwatchState};
