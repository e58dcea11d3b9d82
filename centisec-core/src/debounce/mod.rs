//! Sample-window button debouncing
//!
//! Each button keeps a rolling window of its last `N` raw samples. A press
//! is confirmed only when every sample in the window reads pressed. The
//! window is fed once per display refresh, so debounce latency is
//! `N` refresh periods rather than a wall-clock timeout.

pub mod bank;
pub mod debouncer;
pub mod index;
pub mod window;

pub use bank::{ButtonBank, ButtonId};
pub use debouncer::Debouncer;
pub use index::WrappingIndex;
pub use window::SampleWindow;

/// Default number of samples per window
pub const DEFAULT_WINDOW: usize = 5;
