//! The Simon tone/color table
//!
//! These values are the identity of the game and must not drift:
//!
//! - Red, upper left:     440 Hz - 2.272 ms period - 1136 us half-period
//! - Green, upper right:  880 Hz - 1.136 ms period -  568 us half-period
//! - Blue, lower left:    587.33 Hz - 1.702 ms period - 851 us half-period
//! - White, lower right:  784 Hz - 1.276 ms period -  638 us half-period
//!
//! Green is an octave above red; blue and white are each a perfect fourth
//! above the key to their upper left.

use mnemo_hal::Choice;

/// What one game color looks and sounds like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneSpec {
    /// PWM intensities for the RGB LED.
    pub rgb: (u8, u8, u8),
    /// Microseconds between buzzer toggles; one full square-wave period
    /// is twice this.
    pub half_period_us: u32,
}

impl ToneSpec {
    /// Look up the tone for a game color.
    pub const fn of(choice: Choice) -> Self {
        match choice {
            Choice::Red => Self {
                rgb: (255, 0, 0),
                half_period_us: 1136,
            },
            Choice::Green => Self {
                rgb: (0, 255, 0),
                half_period_us: 568,
            },
            Choice::Blue => Self {
                rgb: (0, 0, 255),
                half_period_us: 851,
            },
            Choice::White => Self {
                rgb: (255, 255, 255),
                half_period_us: 638,
            },
        }
    }

    /// Approximate frequency in Hz, for diagnostics.
    pub const fn frequency_hz(&self) -> u32 {
        500_000 / self.half_period_us
    }
}
