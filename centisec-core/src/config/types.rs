//! Configuration type definitions
//!
//! `Default` for every type reproduces the reference stopwatch: 2.5 ms
//! dwell per digit, a counter that wraps at the display's capacity and
//! active-high buttons.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::display::MAX_DIGITS;

/// Maximum board name length
pub const MAX_NAME_LEN: usize = 16;

/// Reference dwell time per digit (µs)
pub const DEFAULT_DWELL_US: u32 = 2_500;

/// Shortest accepted dwell time (µs)
pub const MIN_DWELL_US: u32 = 100;

/// Longest accepted dwell time (µs); beyond this the display flickers
pub const MAX_DWELL_US: u32 = 10_000;

/// What the tick counter does when it passes the display's capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Roll over from 99.99 s to 00.00 s
    #[default]
    Wrap,
    /// Hold at 99.99 s until reset
    Saturate,
}

/// Stopwatch behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StopwatchConfig {
    /// Time each digit stays lit per refresh (µs)
    pub dwell_us: u32,
    /// Tick counter overflow behavior
    pub overflow: OverflowPolicy,
    /// Deselect all digits before switching segment patterns
    pub blank_between_digits: bool,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            dwell_us: DEFAULT_DWELL_US,
            overflow: OverflowPolicy::Wrap,
            blank_between_digits: false,
        }
    }
}

impl StopwatchConfig {
    /// Duration of one full refresh, i.e. one tick (µs)
    pub const fn refresh_period_us(&self) -> u32 {
        self.dwell_us * MAX_DIGITS as u32
    }

    /// Check that the dwell time is within the accepted range
    pub const fn is_valid(&self) -> bool {
        self.dwell_us >= MIN_DWELL_US && self.dwell_us <= MAX_DWELL_US
    }
}

/// Button wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Buttons pull their pin low when pressed
    pub active_low: bool,
}

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Board name, shown in the boot log
    pub name: String<MAX_NAME_LEN>,
    /// Stopwatch behavior
    pub stopwatch: StopwatchConfig,
    /// Button wiring
    pub buttons: ButtonConfig,
}
