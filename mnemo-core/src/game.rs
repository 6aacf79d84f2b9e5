//! The memory game itself
//!
//! One round is append -> playback -> echo; the round number always equals
//! the current sequence length. All game state lives in one [`GameState`]
//! value passed by reference, there are no module-level globals.

use heapless::Vec;
use mnemo_hal::{Board, Choice, RandomSource};

use crate::config;
use crate::input;
use crate::log;
use crate::output;
use crate::state::{Phase, PhaseEvent};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Player echoed every round
    Win,
    /// Wrong key or entry timeout
    Loss,
}

/// The growing sequence and the phase the game is in.
///
/// Invariants: every stored element is one of the four colors (absence is
/// never stored), and the logical length equals the current round number.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameState {
    sequence: Vec<Choice, { config::MAX_SEQUENCE }>,
    phase: Phase,
}

impl GameState {
    /// Fresh game with an empty sequence.
    pub const fn new() -> Self {
        Self {
            sequence: Vec::new(),
            phase: Phase::Idle,
        }
    }

    /// Current round number; equal to the sequence length.
    pub fn round(&self) -> u8 {
        self.sequence.len() as u8
    }

    /// The sequence generated so far.
    pub fn sequence(&self) -> &[Choice] {
        &self.sequence
    }

    /// The phase the game is currently in (or ended in).
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn reset(&mut self) {
        self.sequence.clear();
        self.phase = Phase::Idle;
    }

    fn append(&mut self, choice: Choice) {
        // Capacity is guaranteed by the rounds clamp in play_rounds
        self.sequence.push(choice).ok();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Play one full game to [`config::ROUNDS_TO_WIN`] rounds.
///
/// Resets `game`, seeds the randomizer from the millisecond counter (the
/// seed is latched on the first human key press after an arbitrary attract
/// interval), then runs rounds until the player wins or fails.
pub fn play_memory<B: Board>(board: &mut B, game: &mut GameState) -> Outcome {
    play_rounds(board, game, config::ROUNDS_TO_WIN)
}

/// Play a game to an explicit round target.
///
/// `play_memory` is the production entry point; this one exists so
/// bounded scenarios can be exercised without sitting through all seven
/// rounds. The target is clamped to the sequence capacity.
pub fn play_rounds<B: Board>(board: &mut B, game: &mut GameState, rounds_to_win: u8) -> Outcome {
    log::info!("play_memory");

    let rounds_to_win = rounds_to_win.min(config::MAX_SEQUENCE as u8);

    board.seed(board.now_ms());
    game.reset();

    loop {
        match game.phase {
            Phase::Idle => {
                game.phase = game.phase.transition(PhaseEvent::Start);
            }

            Phase::Appending => {
                let choice = draw(board);
                game.append(choice);
                game.phase = game.phase.transition(PhaseEvent::ChoiceAppended);
            }

            Phase::Playback => {
                for i in 0..game.sequence.len() {
                    output::tone(board, game.sequence[i], config::TONE_MS);
                    board.sleep_ms(config::PLAYBACK_GAP_MS);
                }
                game.phase = game.phase.transition(PhaseEvent::PlaybackFinished);
            }

            Phase::Verify => {
                let mut event = if game.round() >= rounds_to_win {
                    PhaseEvent::FinalEchoMatched
                } else {
                    PhaseEvent::EchoMatched
                };

                for i in 0..game.sequence.len() {
                    match input::wait_for_button(board, config::ENTRY_TIMEOUT_MS) {
                        Some(choice) if choice == game.sequence[i] => {}
                        // Wrong key and timeout get the same treatment
                        _ => {
                            event = PhaseEvent::EchoFailed;
                            break;
                        }
                    }
                }

                if event != PhaseEvent::EchoFailed {
                    board.sleep_ms(config::ROUND_PAUSE_MS);
                }
                game.phase = game.phase.transition(event);
            }

            Phase::Won => return Outcome::Win,
            Phase::Lost => return Outcome::Loss,
        }
    }
}

/// Draw one uniformly random color.
fn draw<R: RandomSource>(rng: &mut R) -> Choice {
    let idx = rng.next_in(0, Choice::ALL.len() as u32) as usize;
    Choice::ALL[idx % Choice::ALL.len()]
}
