//! Digit decomposition
//!
//! Digits are derived on demand by repeated division by 10; nothing about
//! the displayed value is stored between refreshes.

use core::iter::FusedIterator;

use super::segments::{segment_pattern, DIGIT_SELECT, MAX_DIGITS};

/// One multiplex step: a segment pattern and the digit that shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Pattern for the segment port
    pub segments: u8,
    /// One-hot mask for the select port
    pub select: u8,
}

/// Splits values into per-digit frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitRenderer {
    digit_count: usize,
}

impl Default for DigitRenderer {
    fn default() -> Self {
        Self::new(MAX_DIGITS)
    }
}

impl DigitRenderer {
    /// Create a renderer for `digit_count` digits
    ///
    /// Counts above [`MAX_DIGITS`] are clamped; there are only that many
    /// select lines.
    pub const fn new(digit_count: usize) -> Self {
        let digit_count = if digit_count > MAX_DIGITS {
            MAX_DIGITS
        } else {
            digit_count
        };
        Self { digit_count }
    }

    /// Number of frames per refresh
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Frames for `value`, least-significant digit first
    ///
    /// Digits above `digit_count` are dropped, so the display shows
    /// `value mod 10^digit_count`.
    pub fn render(&self, value: u32) -> Frames {
        Frames {
            value,
            remaining: value,
            position: 0,
            count: self.digit_count,
        }
    }
}

/// Lazy, restartable sequence of [`Frame`]s for one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frames {
    value: u32,
    remaining: u32,
    position: usize,
    count: usize,
}

impl Frames {
    /// Rewind to the least-significant digit
    pub fn restart(&mut self) {
        self.remaining = self.value;
        self.position = 0;
    }
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.position >= self.count {
            return None;
        }

        let frame = Frame {
            segments: segment_pattern(self.remaining),
            select: DIGIT_SELECT[self.position],
        };
        self.remaining /= 10;
        self.position += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.position;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Frames {}

impl FusedIterator for Frames {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::SEGMENT_MAP;

    #[test]
    fn test_render_1234() {
        let frames: Vec<Frame> = DigitRenderer::new(4).render(1234).collect();
        assert_eq!(
            frames,
            [
                Frame { segments: SEGMENT_MAP[4], select: 0b1000 },
                Frame { segments: SEGMENT_MAP[3], select: 0b0100 },
                Frame { segments: SEGMENT_MAP[2], select: 0b0010 },
                Frame { segments: SEGMENT_MAP[1], select: 0b0001 },
            ]
        );
    }

    #[test]
    fn test_leading_zeros_are_shown() {
        let segments: Vec<u8> = DigitRenderer::default()
            .render(7)
            .map(|f| f.segments)
            .collect();
        assert_eq!(segments, [SEGMENT_MAP[7], SEGMENT_MAP[0], SEGMENT_MAP[0], SEGMENT_MAP[0]]);
    }

    #[test]
    fn test_high_digits_dropped() {
        let a: Vec<Frame> = DigitRenderer::default().render(65_535).collect();
        let b: Vec<Frame> = DigitRenderer::default().render(5_535).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_length() {
        let renderer = DigitRenderer::default();
        let mut frames = renderer.render(42);
        assert_eq!(frames.len(), 4);
        frames.next();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.by_ref().count(), 3);
        assert_eq!(frames.next(), None);
    }

    #[test]
    fn test_restart_replays_sequence() {
        let mut frames = DigitRenderer::default().render(9081);
        let first: Vec<Frame> = frames.by_ref().collect();
        frames.restart();
        let second: Vec<Frame> = frames.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_digit_count_clamped() {
        assert_eq!(DigitRenderer::new(9).digit_count(), MAX_DIGITS);
        assert_eq!(DigitRenderer::new(2).render(1234).count(), 2);
        assert_eq!(DigitRenderer::new(0).render(1234).count(), 0);
    }
}
