//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in centisec-core on top of `embedded-hal` 1.0:
//!
//! - 7-segment display (segment and digit-select pin banks)
//! - Push buttons (active-high or active-low)
//! - Blocking delay
//!
//! Pins are required to be infallible (`Error = Infallible`), which is the
//! case for on-chip GPIO on the supported HALs. A pin write therefore
//! cannot fail and the core traits stay error-free.

#![no_std]
#![deny(unsafe_code)]

use core::convert::Infallible;

pub mod delay;
pub mod display;
pub mod input;

pub use delay::HalDelay;
pub use display::{ActiveLevel, MultiplexedDisplay, SegmentPins, SelectPins};
pub use input::GpioButtons;

/// Unwrap a result whose error type has no values
#[inline]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
