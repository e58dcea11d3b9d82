//! Multiplexed 7-segment display
//!
//! [`DigitRenderer`] turns a number into one [`Frame`] per digit;
//! [`Multiplexer`] pushes those frames through the display ports, holding
//! each one for the configured dwell time. One pass over all frames is one
//! display refresh.

pub mod multiplex;
pub mod renderer;
pub mod segments;

pub use multiplex::Multiplexer;
pub use renderer::{DigitRenderer, Frame, Frames};
pub use segments::{segment_pattern, DIGIT_SELECT, MAX_DIGITS, SEGMENT_MAP};
