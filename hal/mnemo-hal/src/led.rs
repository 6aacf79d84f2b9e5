//! RGB LED abstraction
//!
//! Three PWM channels, 0-255 intensity each, active-high. Writes are
//! latched immediately and do not block beyond the register write.

/// Three-channel PWM LED.
pub trait RgbLed {
    /// Write 8-bit intensities to the red, green and blue channels.
    fn set_rgb(&mut self, r: u8, g: u8, b: u8);

    /// Turn the LED off. `(0,0,0)` is the canonical off state.
    fn off(&mut self) {
        self.set_rgb(0, 0, 0);
    }
}
