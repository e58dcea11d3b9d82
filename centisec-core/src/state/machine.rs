//! State machine definition
//!
//! Whether the counter advances is a function of the current state only;
//! the state changes only through [`StopwatchState::transition`].

use crate::debounce::ButtonId;

use super::events::Event;

/// Stopwatch states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchState {
    /// Counter frozen, display shows the held value
    #[default]
    Stopped,
    /// Counter advances once per display refresh
    Running,
}

/// Input-handling sub-state
///
/// Replaces the busy-wait on a held button: while awaiting release the
/// display keeps refreshing and the counter keeps its state's behavior,
/// but no confirmed press is acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Confirmed presses are applied
    #[default]
    Polling,
    /// Waiting for this button to read released
    AwaitingRelease(ButtonId),
}

impl StopwatchState {
    /// Check if the counter should advance
    pub fn is_running(&self) -> bool {
        matches!(self, StopwatchState::Running)
    }

    /// Check if `event` has any effect in this state
    pub fn accepts(self, event: Event) -> bool {
        use Event::*;
        use StopwatchState::*;

        matches!(
            (self, event),
            (Stopped, Start) | (Running, Stop) | (_, Reset)
        )
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use StopwatchState::*;

        match (self, event) {
            (Stopped, Start) => Running,
            (Running, Stop) => Stopped,
            (_, Reset) => Stopped,

            // Start while running, stop while stopped: no change
            _ => self,
        }
    }
}
