//! 7-segment display drivers
//!
//! A multiplexed display is two pin banks: seven shared segment lines and
//! one select line per digit. Either bank may be wired active-low (common
//! anode displays, PNP digit drivers).

pub mod pins;

pub use pins::{MultiplexedDisplay, SegmentPins, SelectPins};

use embedded_hal::digital::PinState;

/// Whether a line is driven active-high or active-low on the board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    #[default]
    High,
    Low,
}

impl ActiveLevel {
    /// Pin level that makes the line logically on (`true`) or off
    pub const fn pin_state(self, on: bool) -> PinState {
        match (self, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => PinState::High,
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => PinState::Low,
        }
    }

    /// Whether a pin reading `high` means the line is logically on
    pub const fn is_active(self, high: bool) -> bool {
        match self {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        }
    }

    /// Level for a board wired active-low when `active_low` is set
    pub const fn from_active_low(active_low: bool) -> Self {
        if active_low {
            ActiveLevel::Low
        } else {
            ActiveLevel::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_state() {
        assert_eq!(ActiveLevel::High.pin_state(true), PinState::High);
        assert_eq!(ActiveLevel::High.pin_state(false), PinState::Low);
        assert_eq!(ActiveLevel::Low.pin_state(true), PinState::Low);
        assert_eq!(ActiveLevel::Low.pin_state(false), PinState::High);
    }

    #[test]
    fn test_is_active() {
        assert!(ActiveLevel::High.is_active(true));
        assert!(!ActiveLevel::High.is_active(false));
        assert!(ActiveLevel::Low.is_active(false));
        assert!(!ActiveLevel::Low.is_active(true));
    }
}
