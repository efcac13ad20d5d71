//! Timing-source abstraction.

/// A hardware timer capable of firing a callback at a programmable period
/// and accepting a new period before its next event.
///
/// Implementations wrap the platform's timer peripheral: `arm` starts event
/// generation, `reprogram` updates the auto-reload and compare registers
/// for the following event without stopping, `disarm` stops generation.
/// The compare value drives the pulse output at 50 % duty (`period / 2`).
///
/// All operations are register writes and therefore infallible.
pub trait StepTimer {
    /// Start generating periodic events at `period` timer ticks.
    fn arm(&mut self, period: u32, compare: u32);

    /// Update period and compare for the following event.
    fn reprogram(&mut self, period: u32, compare: u32);

    /// Stop generating events.
    fn disarm(&mut self);
}

impl<T: StepTimer + ?Sized> StepTimer for &mut T {
    fn arm(&mut self, period: u32, compare: u32) {
        (**self).arm(period, compare)
    }

    fn reprogram(&mut self, period: u32, compare: u32) {
        (**self).reprogram(period, compare)
    }

    fn disarm(&mut self) {
        (**self).disarm()
    }
}
