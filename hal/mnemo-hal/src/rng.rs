//! Sequence randomness
//!
//! The game seeds from the millisecond counter at game entry; the seed is
//! latched on the first human key press after an arbitrary attract
//! interval, which is adequate unpredictability for a toy. Boards with a
//! hardware entropy source may ignore the seed, as long as draws stay
//! uniform over the requested range.

/// Seedable uniform random source.
pub trait RandomSource {
    /// Re-seed the generator.
    fn seed(&mut self, value: u32);

    /// Uniform draw from the half-open range `[lo, hi)`.
    fn next_in(&mut self, lo: u32, hi: u32) -> u32;
}
