//! Board-agnostic game logic for the Mnemo door controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Tone/color table and the square-wave output engine
//! - Debounced, timeout-bounded input acquisition
//! - The round/sequence game logic and its phase machine
//! - The attract/game/unlock supervisor
//! - The optional easter-egg melody player
//!
//! Everything below runs as one synchronous control flow; the only
//! suspension points are the blocking waits of the [`mnemo_hal`] traits.

#![no_std]
#![deny(unsafe_code)]

pub use mnemo_hal::Choice;

pub mod config;
pub mod game;
pub mod input;
pub(crate) mod log;
#[cfg(feature = "easter-egg")]
pub mod melody;
pub mod output;
pub mod state;
pub mod supervisor;
pub mod tones;
