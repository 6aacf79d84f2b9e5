//! Shared helpers for the simulator-driven tests
#![allow(dead_code)]

use mnemo_core::Choice;
use mnemo_sim::SimBoard;

/// The reference game: RED, GREEN, RED, BLUE, WHITE, GREEN, BLUE.
pub const SIMON_DRAWS: [u32; 7] = [0, 1, 0, 2, 3, 1, 2];

/// Map raw randomizer draws to the colors the game will generate.
pub fn colors_of(draws: &[u32]) -> Vec<Choice> {
    draws
        .iter()
        .map(|&draw| Choice::ALL[draw as usize % Choice::ALL.len()])
        .collect()
}

/// Script a player who echoes every round of `seq` correctly: the prefix
/// of length 1, then 2, up to the full sequence.
pub fn queue_perfect_echo(board: &mut SimBoard, seq: &[Choice]) {
    for round in 1..=seq.len() {
        board.queue_echo(&seq[..round]);
    }
}
