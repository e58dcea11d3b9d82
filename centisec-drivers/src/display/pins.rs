//! GPIO pin banks for a multiplexed display

use centisec_core::display::MAX_DIGITS;
use centisec_core::traits::{DigitSelectPort, SegmentPort};
use core::convert::Infallible;
use embedded_hal::digital::OutputPin;

use super::ActiveLevel;
use crate::infallible;

/// Number of segment lines (a..g)
pub const SEGMENT_LINES: usize = 7;

/// Drive every pin in `pins` from the low bits of `bits`
fn write_bits<P>(pins: &mut [P], bits: u8, level: ActiveLevel)
where
    P: OutputPin<Error = Infallible>,
{
    for (bit, pin) in pins.iter_mut().enumerate() {
        let on = bits & (1 << bit) != 0;
        infallible(pin.set_state(level.pin_state(on)));
    }
}

/// Segment lines a..g on `pins[0]..pins[6]`
pub struct SegmentPins<P> {
    pins: [P; SEGMENT_LINES],
    level: ActiveLevel,
}

impl<P: OutputPin<Error = Infallible>> SegmentPins<P> {
    /// Create a segment bank, initially all segments off
    pub fn new(pins: [P; SEGMENT_LINES], level: ActiveLevel) -> Self {
        let mut bank = Self { pins, level };
        bank.write_segments(0);
        bank
    }

    /// Give the pins back
    pub fn release(self) -> [P; SEGMENT_LINES] {
        self.pins
    }
}

impl<P: OutputPin<Error = Infallible>> SegmentPort for SegmentPins<P> {
    fn write_segments(&mut self, pattern: u8) {
        write_bits(&mut self.pins, pattern, self.level);
    }
}

/// Digit select lines, `pins[i]` driven by mask bit `i`
pub struct SelectPins<P> {
    pins: [P; MAX_DIGITS],
    level: ActiveLevel,
}

impl<P: OutputPin<Error = Infallible>> SelectPins<P> {
    /// Create a select bank, initially with no digit selected
    pub fn new(pins: [P; MAX_DIGITS], level: ActiveLevel) -> Self {
        let mut bank = Self { pins, level };
        bank.write_select(0);
        bank
    }

    /// Give the pins back
    pub fn release(self) -> [P; MAX_DIGITS] {
        self.pins
    }
}

impl<P: OutputPin<Error = Infallible>> DigitSelectPort for SelectPins<P> {
    fn write_select(&mut self, mask: u8) {
        write_bits(&mut self.pins, mask, self.level);
    }
}

/// Segment and select banks as a single display
pub struct MultiplexedDisplay<S, D> {
    segments: SegmentPins<S>,
    select: SelectPins<D>,
}

impl<S, D> MultiplexedDisplay<S, D>
where
    S: OutputPin<Error = Infallible>,
    D: OutputPin<Error = Infallible>,
{
    /// Combine a segment bank and a select bank
    pub fn new(segments: SegmentPins<S>, select: SelectPins<D>) -> Self {
        Self { segments, select }
    }
}

impl<S, D> SegmentPort for MultiplexedDisplay<S, D>
where
    S: OutputPin<Error = Infallible>,
{
    fn write_segments(&mut self, pattern: u8) {
        self.segments.write_segments(pattern);
    }
}

impl<S, D> DigitSelectPort for MultiplexedDisplay<S, D>
where
    D: OutputPin<Error = Infallible>,
{
    fn write_select(&mut self, mask: u8) {
        self.select.write_select(mask);
    }
}
