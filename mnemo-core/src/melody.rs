//! Easter-egg melody player ("Stayin' Alive")
//!
//! A fixed disco riff with a red/green/blue LED rotation. It never touches
//! game state and nothing in the shipped game loop triggers it; builds
//! that want it enable the `easter-egg` feature and call
//! [`play`] from their own entry point.

use mnemo_hal::{Buzzer, Delay, RgbLed};

use crate::output;

const NOTE_D4: u16 = 294;
const NOTE_E4: u16 = 330;
const NOTE_G4: u16 = 392;
const NOTE_A4: u16 = 440;
const NOTE_C5: u16 = 523;

/// Note frequencies in Hz, roughly 1/8th notes each; `None` is a rest.
#[rustfmt::skip]
pub const MELODY: [Option<u16>; 32] = [
    Some(NOTE_G4), Some(NOTE_A4), None, Some(NOTE_C5), None, None, Some(NOTE_G4), None, None, None,
    Some(NOTE_E4), None, Some(NOTE_D4), Some(NOTE_E4), Some(NOTE_G4), None,
    Some(NOTE_D4), Some(NOTE_E4), None, Some(NOTE_G4), None, None,
    Some(NOTE_D4), None, Some(NOTE_E4), None, Some(NOTE_G4), None, Some(NOTE_A4), None, Some(NOTE_C5), None,
];

/// Note length in milliseconds. This sets the tempo; 115 is just about
/// right for a disco groove.
pub const NOTE_MS: u32 = 115;

/// LED rotation while the melody plays.
const ROTATION: [(u8, u8, u8); 3] = [(255, 0, 0), (0, 255, 0), (0, 0, 255)];

/// Play the melody once, rotating the LED color on every note.
pub fn play<B>(board: &mut B)
where
    B: RgbLed + Buzzer + Delay,
{
    for (i, note) in MELODY.iter().enumerate() {
        output::set_color(board, ROTATION[i % ROTATION.len()]);

        match note {
            Some(freq) => output::raw_tone(board, NOTE_MS, 500_000 / u32::from(*freq)),
            None => board.sleep_ms(NOTE_MS),
        }

        // A note sounds cleaner with a gap about 30% of its length
        board.sleep_ms(NOTE_MS * 30 / 100);
    }

    board.off();
}
