//! Segment and digit-select encodings

/// Digits on the display
pub const MAX_DIGITS: usize = 4;

/// 7-segment patterns for 0-9 (bit 0 = segment a ... bit 6 = segment g)
pub const SEGMENT_MAP: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// One-hot select masks, least-significant digit first
///
/// The hundredths digit sits on select bit 3, the tens-of-seconds digit on
/// bit 0.
pub const DIGIT_SELECT: [u8; MAX_DIGITS] = [0b1000, 0b0100, 0b0010, 0b0001];

/// Pattern for the lowest decimal digit of `value`
#[inline]
pub const fn segment_pattern(value: u32) -> u8 {
    SEGMENT_MAP[(value % 10) as usize]
}
