//! Blocking delay over `embedded-hal`

use centisec_core::traits::Delay;
use embedded_hal::delay::DelayNs;

/// Adapts any [`DelayNs`] provider to the core [`Delay`] trait
pub struct HalDelay<D> {
    inner: D,
}

impl<D: DelayNs> HalDelay<D> {
    /// Wrap a delay provider
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.inner.delay_us(us);
    }
}
