//! Stopwatch controller
//!
//! Owns the elapsed-time counter, the run state and the button debouncers.
//! One call to [`Stopwatch::cycle`] is one display refresh, one tick and
//! one button poll.

pub mod controller;
pub mod ticks;

pub use controller::{Stopwatch, Transition, Transitions};
pub use ticks::{ElapsedTicks, DISPLAY_MODULUS, MAX_TICKS};
