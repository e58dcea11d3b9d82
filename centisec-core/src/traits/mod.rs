//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod delay;
pub mod display;
pub mod input;

pub use delay::Delay;
pub use display::{DigitSelectPort, DisplayPorts, SegmentPort};
pub use input::ButtonInputs;
