//! GPIO push buttons
//!
//! Reads the three stopwatch buttons straight from their pins on every
//! call; debouncing is done by the core.

use centisec_core::debounce::ButtonId;
use centisec_core::traits::ButtonInputs;
use core::convert::Infallible;
use embedded_hal::digital::InputPin;

use crate::display::ActiveLevel;
use crate::infallible;

/// Start, Stop and Reset buttons on GPIO inputs
pub struct GpioButtons<I> {
    start: I,
    stop: I,
    reset: I,
    /// Level a pressed button reads at
    level: ActiveLevel,
}

impl<I: InputPin<Error = Infallible>> GpioButtons<I> {
    /// Create a button set
    ///
    /// # Arguments
    /// - `level`: `High` for buttons to VCC with pull-downs, `Low` for
    ///   buttons to ground with pull-ups
    pub fn new(start: I, stop: I, reset: I, level: ActiveLevel) -> Self {
        Self {
            start,
            stop,
            reset,
            level,
        }
    }

    fn pin(&mut self, id: ButtonId) -> &mut I {
        match id {
            ButtonId::Start => &mut self.start,
            ButtonId::Stop => &mut self.stop,
            ButtonId::Reset => &mut self.reset,
        }
    }
}

impl<I: InputPin<Error = Infallible>> ButtonInputs for GpioButtons<I> {
    fn is_pressed(&mut self, id: ButtonId) -> bool {
        let level = self.level;
        let high = infallible(self.pin(id).is_high());
        level.is_active(high)
    }
}
