//! Tone-and-light output engine
//!
//! Square waves are generated by toggling the buzzer pin in a busy-wait
//! loop; the target hardware has no free timer for tone generation. The
//! wave loop assumes interrupt jitter is small relative to the half-period
//! (568-1500 us) and must not be multiplexed with other work.

use mnemo_hal::{Buzzer, Choice, Delay, RgbLed};

use crate::tones::ToneSpec;

/// Write an RGB triple to the LED. `(0, 0, 0)` is off.
pub fn set_color<B: RgbLed>(board: &mut B, rgb: (u8, u8, u8)) {
    let (r, g, b) = rgb;
    board.set_rgb(r, g, b);
}

/// Light a game color and sound its tone for `duration_ms`.
///
/// The LED is turned off unconditionally on exit, whatever the wave loop
/// did. A key pressed while this runs is never observed; the keypad is
/// not scanned here, which is what keeps the player's input out of
/// Simon's turn.
pub fn tone<B>(board: &mut B, choice: Choice, duration_ms: u32)
where
    B: RgbLed + Buzzer + Delay,
{
    let spec = ToneSpec::of(choice);
    set_color(board, spec.rgb);
    square_wave(board, duration_ms, spec.half_period_us);
    board.off();
}

/// Sound a square wave without touching the LED. Used by the lose penalty,
/// which cycles colors independently of the growl tones.
pub fn raw_tone<B>(board: &mut B, duration_ms: u32, half_period_us: u32)
where
    B: Buzzer + Delay,
{
    square_wave(board, duration_ms, half_period_us);
}

/// Toggle the buzzer every `half_period_us` for roughly `duration_ms`.
///
/// Each period consumes `2 * half_period_us`; the loop exits when the
/// remaining budget no longer covers a full period, so the emitted tone is
/// never longer than requested.
fn square_wave<B>(board: &mut B, duration_ms: u32, half_period_us: u32)
where
    B: Buzzer + Delay,
{
    let period_us = half_period_us * 2;
    let mut budget_us = duration_ms.saturating_mul(1000);

    while budget_us > period_us {
        budget_us -= period_us;

        board.set_low();
        board.sleep_us(half_period_us);

        board.set_high();
        board.sleep_us(half_period_us);
    }
}
