//! Monotonic time and blocking delays
//!
//! The game core is a single synchronous control flow; all timing is done
//! with a free-running millisecond counter and busy waits. The counter is
//! allowed to wrap - consumers must compare with wrapping subtraction.

/// Free-running monotonic millisecond counter.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. Wraps at `u32::MAX`.
    ///
    /// Timeout checks against this value must use `wrapping_sub` so that
    /// a wrap during a wait does not cause premature expiry.
    fn now_ms(&self) -> u32;
}

/// Blocking delays.
///
/// Implementations guarantee that *at least* the requested interval has
/// elapsed on return. The microsecond variant is used by the square-wave
/// tone generator and must be accurate to within a few microseconds; on
/// real hardware it runs with interrupts at default priority and no
/// yielding.
pub trait Delay {
    /// Block for at least `us` microseconds.
    fn sleep_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32) {
        self.sleep_us(ms.saturating_mul(1000));
    }
}
