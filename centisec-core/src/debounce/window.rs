//! Fixed-size sample storage for one button

use super::index::WrappingIndex;

/// The last `N` raw samples of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleWindow<const N: usize> {
    samples: [bool; N],
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleWindow<N> {
    /// Create a window with every slot released
    pub const fn new() -> Self {
        Self {
            samples: [false; N],
        }
    }

    /// Store a sample in the given slot
    #[inline]
    pub fn write(&mut self, slot: WrappingIndex<N>, pressed: bool) {
        self.samples[slot.get()] = pressed;
    }

    /// Mark every slot released
    pub fn clear(&mut self) {
        self.samples = [false; N];
    }

    /// Number of slots holding a pressed sample
    pub fn pressed_count(&self) -> usize {
        self.samples.iter().filter(|&&s| s).count()
    }

    /// True when every slot holds a pressed sample
    pub fn is_unanimous(&self) -> bool {
        self.pressed_count() == N
    }

    /// Raw slot contents, in slot order
    pub fn samples(&self) -> &[bool; N] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanimous_needs_every_slot() {
        let mut window = SampleWindow::<3>::new();
        window.write(WrappingIndex::from_raw(0), true);
        window.write(WrappingIndex::from_raw(1), true);
        assert_eq!(window.pressed_count(), 2);
        assert!(!window.is_unanimous());

        window.write(WrappingIndex::from_raw(2), true);
        assert!(window.is_unanimous());
    }

    #[test]
    fn test_clear_zeroes_all_slots() {
        let mut window = SampleWindow::<4>::new();
        for raw in 0..4 {
            window.write(WrappingIndex::from_raw(raw), true);
        }
        window.clear();
        assert_eq!(window.samples(), &[false; 4]);
        assert_eq!(window.pressed_count(), 0);
    }
}
