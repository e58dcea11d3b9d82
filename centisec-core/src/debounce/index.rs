//! Rotating index bounded to `0..N`
//!
//! Window slots are addressed only through this type, so a write outside a
//! window's storage cannot be expressed regardless of what the caller does
//! with its own counters.

/// Index into an `N`-slot ring, always in `0..N`
///
/// `N` must be non-zero; an empty ring fails to compile as soon as an
/// index for it is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WrappingIndex<const N: usize> {
    value: usize,
}

impl<const N: usize> WrappingIndex<N> {
    const NON_EMPTY: () = assert!(N > 0, "ring must have at least one slot");

    /// Index of the first slot
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self { value: 0 }
    }

    /// Reduce an arbitrary counter into the ring
    pub const fn from_raw(raw: usize) -> Self {
        let () = Self::NON_EMPTY;
        Self { value: raw % N }
    }

    /// Current slot
    #[inline]
    pub const fn get(self) -> usize {
        self.value
    }

    /// The slot after this one, wrapping to 0 after `N - 1`
    pub const fn next(self) -> Self {
        if self.value + 1 >= N {
            Self { value: 0 }
        } else {
            Self {
                value: self.value + 1,
            }
        }
    }

    /// Move to the next slot, returning the slot that was current
    pub fn advance(&mut self) -> Self {
        let current = *self;
        *self = current.next();
        current
    }
}

impl<const N: usize> Default for WrappingIndex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<WrappingIndex<N>> for usize {
    fn from(index: WrappingIndex<N>) -> usize {
        index.get()
    }
}
