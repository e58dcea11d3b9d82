//! Blocking delay

/// Busy or blocking wait used for digit dwell time
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
