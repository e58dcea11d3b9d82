//! Display multiplexing
//!
//! Drives one full refresh: for every frame, write the segment pattern,
//! select its digit, then hold for the dwell time. Only one select bit is
//! ever set, so the previous digit goes dark as soon as the next one is
//! selected.

use crate::config::StopwatchConfig;
use crate::traits::{Delay, DisplayPorts};

use super::renderer::Frames;

/// Multiplex timing and blanking policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    dwell_us: u32,
    blank_between_digits: bool,
}

impl Multiplexer {
    /// Create a multiplexer from stopwatch configuration
    pub const fn new(config: &StopwatchConfig) -> Self {
        Self {
            dwell_us: config.dwell_us,
            blank_between_digits: config.blank_between_digits,
        }
    }

    /// Show every frame once, holding each for the dwell time
    ///
    /// With blanking enabled all digits are deselected before each new
    /// pattern is written and again after the last frame.
    pub fn refresh<P, D>(&self, frames: Frames, ports: &mut P, delay: &mut D)
    where
        P: DisplayPorts,
        D: Delay,
    {
        for frame in frames {
            if self.blank_between_digits {
                ports.blank();
            }
            ports.write_segments(frame.segments);
            ports.write_select(frame.select);
            delay.delay_us(self.dwell_us);
        }

        if self.blank_between_digits {
            ports.blank();
        }
    }
}
