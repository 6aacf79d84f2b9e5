//! Game timing and tuning constants
//!
//! All of these are build-time constants; runtime difficulty adjustment is
//! deliberately not supported.

/// Rounds the player must echo correctly to win (and unlock).
pub const ROUNDS_TO_WIN: u8 = 7;

/// Sequence buffer capacity. Larger than [`ROUNDS_TO_WIN`] to leave room
/// for longer historical variants of the game.
pub const MAX_SEQUENCE: usize = 13;

/// How long the player has to press each button during the echo phase.
pub const ENTRY_TIMEOUT_MS: u32 = 3000;

/// Tone length during playback and input echo.
pub const TONE_MS: u32 = 150;

/// Silence between playback tones; equal to the tone length so the player
/// perceives evenly spaced pulses.
pub const PLAYBACK_GAP_MS: u32 = 150;

/// Pause after a fully matched echo before the next round starts.
pub const ROUND_PAUSE_MS: u32 = 1000;

/// Extra settle delay after a key release, against contact bounce and
/// accidental double taps.
pub const RELEASE_SETTLE_MS: u32 = 10;

/// LED-off settle before the first round plays.
pub const GAME_SETTLE_MS: u32 = 200;

/// Poll interval of the attract loop between idle chunks.
pub const ATTRACT_POLL_MS: u32 = 10;

/// How long the strike relay stays energized after a win.
pub const WIN_HOLD_MS: u32 = 15_000;

/// How long the strike relay stays energized on a manual unlock.
pub const MANUAL_UNLOCK_HOLD_MS: u32 = 7_000;

/// Lose penalty: half-period of the low growl tones.
pub const LOSE_TONE_HALF_PERIOD_US: u32 = 1500;

/// Lose penalty: length of each growl tone.
pub const LOSE_TONE_MS: u32 = 255;

/// Lose penalty: solid red hold after the growls.
pub const LOSE_HOLD_MS: u32 = 3000;

/// Winner chirp sweeps the half-period from this value...
pub const WINNER_CHIRP_START_US: u32 = 250;

/// ...down to this value, inclusive, pitch rising all the way.
pub const WINNER_CHIRP_END_US: u32 = 71;

/// Square-wave periods emitted per chirp step.
pub const WINNER_CHIRP_PERIODS: u32 = 3;
