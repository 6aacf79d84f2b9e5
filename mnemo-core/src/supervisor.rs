//! Top-level supervisor
//!
//! Composes attract, game, celebration, penalty and manual unlock into the
//! cabinet's one endless loop. This is the only module that writes the
//! strike relay: low on boot, energized exactly for the win hold and the
//! manual-unlock hold, released on exit of either.

use mnemo_hal::{Board, Buzzer, Delay};

use crate::config;
use crate::game::{self, GameState, Outcome};
use crate::log;
use crate::output;
use crate::state::{Mode, ModeEvent};

/// Winner animation colors: cyan, magenta, yellow, green.
const WINNER_COLORS: [(u8, u8, u8); 4] =
    [(0, 255, 255), (255, 0, 255), (255, 255, 0), (0, 255, 0)];

/// Lose penalty colors under the four growl tones: red, yellow, cyan,
/// magenta.
const PENALTY_COLORS: [(u8, u8, u8); 4] =
    [(255, 0, 0), (255, 255, 0), (0, 255, 255), (255, 0, 255)];

/// The cabinet's top-level state machine.
pub struct Supervisor {
    mode: Mode,
    game: GameState,
}

impl Supervisor {
    /// Boot state: attract mode, empty game.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Attract,
            game: GameState::new(),
        }
    }

    /// Current supervisor mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The most recent game's state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Execute the current mode's (blocking) behavior and transition.
    ///
    /// Attract blocks until a player or the unlock button shows up; the
    /// other modes run their animation or game to completion. One `step`
    /// therefore corresponds to one arrow of the mode machine.
    pub fn step<B: Board>(&mut self, board: &mut B) {
        let event = match self.mode {
            Mode::Attract => attract(board),

            Mode::Game => {
                log::info!("Game mode");
                board.off();
                board.sleep_ms(config::GAME_SETTLE_MS);

                match game::play_memory(board, &mut self.game) {
                    Outcome::Win => ModeEvent::GameWon,
                    Outcome::Loss => ModeEvent::GameLost,
                }
            }

            Mode::WinCelebration => {
                play_winner(board);
                ModeEvent::CelebrationDone
            }

            Mode::LosePenalty => {
                play_loser(board);
                ModeEvent::PenaltyDone
            }

            Mode::ManualUnlock => {
                manual_unlock(board);
                ModeEvent::UnlockDone
            }
        };

        self.mode = self.mode.transition(event);
    }

    /// Run the cabinet forever.
    pub fn run<B: Board>(&mut self, board: &mut B) -> ! {
        loop {
            self.step(board);
        }
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Dark-LED idle loop, in ~250 ms low-power chunks.
///
/// The first scan per chunk only refreshes the matrix state and is
/// discarded; the second is the one that can start a game.
fn attract<B: Board>(board: &mut B) -> ModeEvent {
    log::info!("attractMode");
    board.off();

    loop {
        let _ = board.scan();
        board.sleep_ms(config::ATTRACT_POLL_MS);

        if board.scan().is_some() {
            return ModeEvent::KeyPressed;
        }
        if board.is_pressed() {
            return ModeEvent::UnlockRequested;
        }

        board.idle_250ms();
    }
}

/// Winner animation: relay energized, four chirp cycles over the winner
/// colors, then the full unlock hold.
fn play_winner<B: Board>(board: &mut B) {
    board.set_engaged(true);

    for rgb in WINNER_COLORS {
        output::set_color(board, rgb);
        winner_sound(board);
    }

    board.sleep_ms(config::WIN_HOLD_MS);
    board.set_engaged(false);
}

/// The winner chirp: half-period sweeping from 250 us down to 71 us,
/// three periods per step, 540 periods of monotonically rising pitch.
/// Just a unique (annoying) sound, there is no magic to it.
fn winner_sound<B>(board: &mut B)
where
    B: Buzzer + Delay,
{
    for x in (config::WINNER_CHIRP_END_US..=config::WINNER_CHIRP_START_US).rev() {
        for _ in 0..config::WINNER_CHIRP_PERIODS {
            board.set_high();
            board.sleep_us(x);

            board.set_low();
            board.sleep_us(x);
        }
    }
}

/// Loser animation: four low growls over cycling colors, then solid red.
/// The relay is never touched here.
fn play_loser<B: Board>(board: &mut B) {
    for rgb in PENALTY_COLORS {
        output::set_color(board, rgb);
        output::raw_tone(board, config::LOSE_TONE_MS, config::LOSE_TONE_HALF_PERIOD_US);
    }

    output::set_color(board, (255, 0, 0));
    board.sleep_ms(config::LOSE_HOLD_MS);
}

/// Manual unlock: relay energized under a green LED for the hold window.
fn manual_unlock<B: Board>(board: &mut B) {
    board.set_engaged(true);
    output::set_color(board, (0, 255, 0));

    board.sleep_ms(config::MANUAL_UNLOCK_HOLD_MS);

    board.set_engaged(false);
    board.off();
}
