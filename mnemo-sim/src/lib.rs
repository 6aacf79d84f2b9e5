//! Simulated board for host-side testing
//!
//! [`SimBoard`] implements every `mnemo-hal` trait against a virtual clock:
//! blocking waits advance time instead of consuming it, every output write
//! is recorded with a microsecond timestamp, and inputs are scripted ahead
//! of the run. A whole game plays out in microseconds of wall time and the
//! resulting [`Trace`] can be checked down to individual buzzer toggles.
//!
//! Key presses are scripted as a queue of [press windows](SimBoard::press_window):
//! a press becomes visible to `scan` no earlier than its start time, is
//! held for a fixed interval once the firmware first observes it, and
//! expires unseen if nobody scans during its window. That last part is
//! what makes "keys pressed during playback are ignored" expressible.

mod board;
mod trace;

pub use board::SimBoard;
pub use trace::{Trace, TraceEvent};
