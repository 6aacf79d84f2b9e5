//! Debounced input acquisition
//!
//! At most one key per call, within a bounded wait window. The echo tone
//! doubles as debounce: 150 ms of tone covers the mechanical settling time
//! of the dome switches, and a further settle delay after release guards
//! against accidental double taps.

use mnemo_hal::{Buzzer, Choice, Clock, Delay, Keypad, RgbLed};

use crate::config;
use crate::log;
use crate::output;

/// Wait for one debounced key press, or time out.
///
/// Polls the keypad until a key is observed or `timeout_ms` has elapsed
/// since entry. On a press: echo the key's tone for 150 ms, wait for
/// release, settle, and return the captured choice. On timeout: `None`,
/// with no output produced.
///
/// The elapsed check uses wrapping subtraction, so a millisecond-counter
/// wrap during the wait does not cut it short.
pub fn wait_for_button<B>(board: &mut B, timeout_ms: u32) -> Option<Choice>
where
    B: Keypad + Clock + Delay + RgbLed + Buzzer,
{
    let start = board.now_ms();

    while board.now_ms().wrapping_sub(start) < timeout_ms {
        if let Some(choice) = board.scan() {
            log::info!("key {}", choice);

            output::tone(board, choice, config::TONE_MS);

            // Wait for the player to let go of the key
            while board.scan().is_some() {}

            board.sleep_ms(config::RELEASE_SETTLE_MS);

            return Some(choice);
        }
    }

    None
}
