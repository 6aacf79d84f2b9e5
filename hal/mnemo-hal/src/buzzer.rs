//! Piezo buzzer pin
//!
//! A single digital output. The tone engine generates square waves by
//! toggling this pin in software; there is no hardware tone generator.

/// Digital buzzer pin.
pub trait Buzzer {
    /// Drive the pin high.
    fn set_high(&mut self);

    /// Drive the pin low.
    fn set_low(&mut self);

    /// Drive the pin to a specific level.
    fn write(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
