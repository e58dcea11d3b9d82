//! Output ports for a multiplexed 7-segment display
//!
//! The display shares seven segment lines across all digits; one-hot
//! select lines choose which digit is lit. Implementations write straight
//! to hardware and must not cache: every call is an observable write.

/// Segment driver lines (a..g on bits 0..6, bit 7 unused)
pub trait SegmentPort {
    /// Drive all seven segment lines from `pattern`
    fn write_segments(&mut self, pattern: u8);
}

/// Digit select lines (one bit per digit, bits 0..3)
pub trait DigitSelectPort {
    /// Drive the select lines from `mask`
    ///
    /// A mask of 0 deselects every digit.
    fn write_select(&mut self, mask: u8);
}

/// Both halves of a multiplexed display
pub trait DisplayPorts: SegmentPort + DigitSelectPort {
    /// Deselect every digit
    fn blank(&mut self) {
        self.write_select(0);
    }
}

// Blanket implementation for anything driving both port halves
impl<T: SegmentPort + DigitSelectPort> DisplayPorts for T {}
