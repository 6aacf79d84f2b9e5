//! Matrix keypad abstraction
//!
//! The board scans a 4x3 matrix; four of its keys are mapped to the four
//! game colors at build time. Which physical key maps to which color is
//! opaque to the core. All other keys are scanned but never reported.

/// One of the four game colors.
///
/// "No key" is represented as `Option::None` by the scan; the absence
/// sentinel is never stored in the game sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Choice {
    Red,
    Green,
    Blue,
    White,
}

impl Choice {
    /// All four choices, in the order the randomizer indexes them.
    pub const ALL: [Choice; 4] = [Choice::Red, Choice::Green, Choice::Blue, Choice::White];
}

/// Polled matrix keypad.
pub trait Keypad {
    /// One non-blocking poll of the matrix.
    ///
    /// Returns at most one `Choice` per distinct physical press; the driver
    /// handles row/column scanning and per-press deduplication. The core
    /// layers its own debounce on top.
    fn scan(&mut self) -> Option<Choice>;
}
