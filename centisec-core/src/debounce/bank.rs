//! The three stopwatch buttons and their debouncers

use super::debouncer::Debouncer;
use super::index::WrappingIndex;
use super::DEFAULT_WINDOW;

/// Physical buttons on the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonId {
    Start,
    Stop,
    Reset,
}

impl ButtonId {
    /// All buttons, in polling order
    pub const ALL: [ButtonId; 3] = [ButtonId::Start, ButtonId::Stop, ButtonId::Reset];

    /// Position in [`ButtonId::ALL`]
    pub const fn index(self) -> usize {
        match self {
            ButtonId::Start => 0,
            ButtonId::Stop => 1,
            ButtonId::Reset => 2,
        }
    }
}

/// One debouncer per [`ButtonId`]
///
/// All three debouncers are sampled together, so their cursors rotate in
/// lock-step and share a single poll index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonBank<const N: usize = DEFAULT_WINDOW> {
    debouncers: [Debouncer<N>; 3],
}

impl<const N: usize> Default for ButtonBank<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ButtonBank<N> {
    /// Create a bank with every window released
    pub const fn new() -> Self {
        Self {
            debouncers: [Debouncer::new(), Debouncer::new(), Debouncer::new()],
        }
    }

    /// Debouncer for one button
    pub fn get(&self, id: ButtonId) -> &Debouncer<N> {
        &self.debouncers[id.index()]
    }

    /// Feed one fresh raw sample into every debouncer
    ///
    /// `read` is called exactly once per button.
    pub fn sample_all(&mut self, mut read: impl FnMut(ButtonId) -> bool) {
        for id in ButtonId::ALL {
            let pressed = read(id);
            self.debouncers[id.index()].sample(pressed);
        }
    }

    /// Whether a button's press is confirmed
    pub fn confirmed(&self, id: ButtonId) -> bool {
        self.get(id).confirmed()
    }

    /// Clear one button's window
    pub fn clear(&mut self, id: ButtonId) {
        self.debouncers[id.index()].clear();
    }

    /// Slot the next poll writes to
    pub fn poll_index(&self) -> WrappingIndex<N> {
        self.get(ButtonId::Start).cursor()
    }
}
