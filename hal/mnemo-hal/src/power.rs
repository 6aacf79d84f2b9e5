//! Low-power idle
//!
//! Outside of active play the controller sleeps in ~250 ms chunks with
//! every peripheral except the wake timer powered down (ADC, SPI, UART,
//! I2C, secondary timers).

/// Timer-wakeup idle sleep.
pub trait IdleSleep {
    /// Enter low-power idle until the ~250 ms timer wakeup fires.
    fn idle_250ms(&mut self);
}
