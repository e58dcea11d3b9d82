//! Consensus debouncer
//!
//! Records one raw sample per poll into a rotating slot of a
//! [`SampleWindow`] and reports a confirmed press when all `N` slots agree.

use super::index::WrappingIndex;
use super::window::SampleWindow;
use super::DEFAULT_WINDOW;

/// Debouncer for a single input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<const N: usize = DEFAULT_WINDOW> {
    /// Last `N` samples
    window: SampleWindow<N>,
    /// Slot the next sample is written to
    cursor: WrappingIndex<N>,
}

impl<const N: usize> Default for Debouncer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Debouncer<N> {
    /// Create a debouncer with an all-released window
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            cursor: WrappingIndex::new(),
        }
    }

    /// Record one raw observation and advance to the next slot
    pub fn sample(&mut self, pressed: bool) {
        let slot = self.cursor.advance();
        self.window.write(slot, pressed);
    }

    /// True when all `N` stored samples read pressed
    pub fn confirmed(&self) -> bool {
        self.window.is_unanimous()
    }

    /// Zero every slot so the current consensus cannot fire again
    ///
    /// The cursor keeps rotating from where it was.
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Slot the next sample will be written to
    pub fn cursor(&self) -> WrappingIndex<N> {
        self.cursor
    }

    /// Underlying sample storage
    pub fn window(&self) -> &SampleWindow<N> {
        &self.window
    }
}
