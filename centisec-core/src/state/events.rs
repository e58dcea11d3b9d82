//! Events that trigger state transitions

use crate::debounce::ButtonId;

/// A confirmed button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start confirmed
    Start,
    /// Stop confirmed
    Stop,
    /// Reset confirmed
    Reset,
}

impl From<ButtonId> for Event {
    fn from(id: ButtonId) -> Self {
        match id {
            ButtonId::Start => Event::Start,
            ButtonId::Stop => Event::Stop,
            ButtonId::Reset => Event::Reset,
        }
    }
}

impl Event {
    /// Button that produced this event
    pub const fn button(self) -> ButtonId {
        match self {
            Event::Start => ButtonId::Start,
            Event::Stop => ButtonId::Stop,
            Event::Reset => ButtonId::Reset,
        }
    }

    /// Whether the controller latches until the button is released
    ///
    /// Start and Reset are edge-triggered: after acting, nothing else
    /// happens until the button is let go. Stop is level-sensitive and
    /// only relies on its window being cleared; holding Stop keeps
    /// re-confirming it every `N` polls, which is harmless because Stop
    /// has no effect while stopped.
    pub const fn awaits_release(self) -> bool {
        matches!(self, Event::Start | Event::Reset)
    }

    /// Windows cleared once this event has been applied
    pub const fn clears(self) -> &'static [ButtonId] {
        match self {
            Event::Start => &[ButtonId::Start, ButtonId::Stop],
            Event::Stop => &[ButtonId::Stop],
            Event::Reset => &[ButtonId::Stop],
        }
    }

    /// Whether this event zeroes the tick counter
    pub const fn resets_counter(self) -> bool {
        matches!(self, Event::Reset)
    }
}
