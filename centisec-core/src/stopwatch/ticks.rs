//! Elapsed time counter
//!
//! Counts hundredths of a second. The value is kept below the display's
//! capacity by an explicit [`OverflowPolicy`] rather than by the width of
//! the storage integer.

use crate::config::OverflowPolicy;

/// One past the largest value four digits can show
pub const DISPLAY_MODULUS: u16 = 10_000;

/// Largest displayable tick count (99.99 s)
pub const MAX_TICKS: u16 = DISPLAY_MODULUS - 1;

/// Elapsed hundredths of a second, always `<= MAX_TICKS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTicks(u16);

impl ElapsedTicks {
    /// Zero elapsed time
    pub const ZERO: Self = Self(0);

    /// Create a tick count, reducing it into range with `policy`
    pub const fn new(ticks: u16, policy: OverflowPolicy) -> Self {
        if ticks <= MAX_TICKS {
            return Self(ticks);
        }
        match policy {
            OverflowPolicy::Wrap => Self(ticks % DISPLAY_MODULUS),
            OverflowPolicy::Saturate => Self(MAX_TICKS),
        }
    }

    /// Raw tick count
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whole seconds elapsed
    pub const fn seconds(self) -> u16 {
        self.0 / 100
    }

    /// Hundredths past the last whole second
    pub const fn hundredths(self) -> u16 {
        self.0 % 100
    }

    /// Advance by one tick
    ///
    /// Returns `false` when the counter was already at [`MAX_TICKS`], in
    /// which case it either wrapped to zero or stayed put depending on
    /// `policy`.
    pub fn increment(&mut self, policy: OverflowPolicy) -> bool {
        if self.0 < MAX_TICKS {
            self.0 += 1;
            return true;
        }
        if policy == OverflowPolicy::Wrap {
            self.0 = 0;
        }
        false
    }

    /// Back to zero
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl From<ElapsedTicks> for u32 {
    fn from(ticks: ElapsedTicks) -> u32 {
        ticks.0 as u32
    }
}
