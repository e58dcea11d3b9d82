//! Embassy async tasks

pub mod stopwatch;

pub use stopwatch::stopwatch_task;
