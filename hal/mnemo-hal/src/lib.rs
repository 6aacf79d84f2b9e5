//! Mnemo Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by board-specific crates (AVR, Cortex-M, host simulator, etc.). This
//! enables the same game logic to run on different hardware platforms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Game logic (mnemo-core)                │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemo-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board crate  │       │   mnemo-sim   │
//! │  (real pins)  │       │  (host sim)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`time::Clock`], [`time::Delay`] - Monotonic time and blocking waits
//! - [`led::RgbLed`] - Three-channel PWM LED
//! - [`buzzer::Buzzer`] - Piezo buzzer pin, toggled in software
//! - [`keypad::Keypad`] - Matrix keypad scan, mapped to [`keypad::Choice`]
//! - [`lock::UnlockLatch`], [`lock::UnlockButton`] - Strike relay and button
//! - [`power::IdleSleep`] - Low-power idle between attract polls
//! - [`rng::RandomSource`] - Sequence randomness
//!
//! The [`Board`] supertrait bundles all of the above for code that drives
//! the whole machine.

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod keypad;
pub mod led;
pub mod lock;
pub mod power;
pub mod rng;
pub mod time;

// Re-export key traits at crate root for convenience
pub use buzzer::Buzzer;
pub use keypad::{Choice, Keypad};
pub use led::RgbLed;
pub use lock::{UnlockButton, UnlockLatch};
pub use power::IdleSleep;
pub use rng::RandomSource;
pub use time::{Clock, Delay};

/// Full set of capabilities the game core needs from a board.
///
/// Blanket-implemented for any type that provides all of the individual
/// traits; board crates implement the narrow traits and get this for free.
pub trait Board:
    Clock + Delay + RgbLed + Buzzer + Keypad + UnlockLatch + UnlockButton + IdleSleep + RandomSource
{
}

impl<T> Board for T where
    T: Clock
        + Delay
        + RgbLed
        + Buzzer
        + Keypad
        + UnlockLatch
        + UnlockButton
        + IdleSleep
        + RandomSource
{
}
