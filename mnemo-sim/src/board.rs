//! The simulated board

use std::collections::VecDeque;

use mnemo_hal::{
    Buzzer, Choice, Clock, Delay, IdleSleep, Keypad, RandomSource, RgbLed, UnlockButton,
    UnlockLatch,
};

use crate::trace::{Trace, TraceEvent};

/// Time a real matrix scan burns; every `scan` advances the clock by this
/// much, which is also what keeps polling loops moving in virtual time.
const DEFAULT_SCAN_COST_US: u64 = 100;

/// How long a scripted press stays down after the firmware first sees it.
const DEFAULT_HOLD_MS: u64 = 50;

/// Quiet time after a release before the next scripted press can appear,
/// so a release busy-poll cannot swallow the following press.
const RELEASE_GAP_MS: u64 = 50;

/// One scripted key press.
#[derive(Debug, Clone)]
struct KeyPress {
    choice: Choice,
    /// Visible to `scan` from this virtual time...
    from_us: u64,
    /// ...until this one; expires unseen afterwards.
    until_us: u64,
    /// Held this long once first observed.
    hold_us: u64,
    /// When the firmware first observed it.
    seen_at_us: Option<u64>,
}

/// Simulated board; see the crate docs.
#[derive(Debug, Default)]
pub struct SimBoard {
    now_us: u64,
    scan_cost_us: u64,

    rgb: (u8, u8, u8),
    buzzer_high: bool,
    unlock_engaged: bool,
    trace: Trace,

    key_queue: VecDeque<KeyPress>,
    next_press_ready_us: u64,
    unlock_button_windows: Vec<(u64, u64)>,

    rng_script: VecDeque<u32>,
    rng_state: u32,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            scan_cost_us: DEFAULT_SCAN_COST_US,
            rng_state: 1,
            ..Self::default()
        }
    }

    /// Board whose millisecond counter starts at `ms` - for exercising
    /// counter wrap during waits.
    pub fn starting_at_ms(ms: u32) -> Self {
        let mut board = Self::new();
        board.now_us = u64::from(ms) * 1000;
        board
    }

    /// Virtual time in microseconds (absolute, never wraps).
    pub fn now_us(&self) -> u64 {
        self.now_us
    }

    /// Virtual time in milliseconds (absolute, never wraps). Script times
    /// are expressed on this axis.
    pub fn now_ms64(&self) -> u64 {
        self.now_us / 1000
    }

    /// Everything the outputs did so far.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Live relay state.
    pub fn unlock_engaged(&self) -> bool {
        self.unlock_engaged
    }

    /// Live LED state.
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// Live buzzer pin level.
    pub fn buzzer_high(&self) -> bool {
        self.buzzer_high
    }

    pub fn set_scan_cost_us(&mut self, us: u64) {
        self.scan_cost_us = us;
    }

    /// Script a press available from time zero until consumed.
    pub fn press(&mut self, choice: Choice) {
        self.press_window(choice, 0, u64::MAX, DEFAULT_HOLD_MS);
    }

    /// Script a press available from `from_ms` until consumed.
    pub fn press_at(&mut self, choice: Choice, from_ms: u64) {
        self.press_window(choice, from_ms, u64::MAX, DEFAULT_HOLD_MS);
    }

    /// Script a press visible in `[from_ms, from_ms + avail_ms)`, held for
    /// `hold_ms` once observed, expiring unseen if never scanned in the
    /// window. Presses are consumed strictly in script order.
    pub fn press_window(&mut self, choice: Choice, from_ms: u64, avail_ms: u64, hold_ms: u64) {
        self.key_queue.push_back(KeyPress {
            choice,
            from_us: from_ms.saturating_mul(1000),
            until_us: from_ms.saturating_add(avail_ms).saturating_mul(1000),
            hold_us: hold_ms.saturating_mul(1000),
            seen_at_us: None,
        });
    }

    /// Script one press per choice, in order - a player echoing a sequence.
    pub fn queue_echo(&mut self, choices: &[Choice]) {
        for &choice in choices {
            self.press(choice);
        }
    }

    /// Hold the manual-unlock button over `[from_ms, until_ms)`.
    pub fn hold_unlock_button(&mut self, from_ms: u64, until_ms: u64) {
        self.unlock_button_windows
            .push((from_ms * 1000, until_ms * 1000));
    }

    /// Prime the randomizer with raw draws; `next_in(lo, hi)` maps each as
    /// `lo + draw % (hi - lo)`. The xorshift fallback takes over when the
    /// script runs dry.
    pub fn script_random(&mut self, draws: &[u32]) {
        self.rng_script.extend(draws);
    }

    fn advance_us(&mut self, us: u64) {
        self.now_us += us;
    }

    fn scan_queue(&mut self) -> Option<Choice> {
        let now = self.now_us;

        loop {
            let front = self.key_queue.front_mut()?;

            if let Some(seen) = front.seen_at_us {
                if now < seen + front.hold_us {
                    return Some(front.choice);
                }
                // Released; quiet gap before the next press may appear
                self.next_press_ready_us = now + RELEASE_GAP_MS * 1000;
                self.key_queue.pop_front();
                return None;
            }

            if now >= front.until_us {
                // Expired unseen (e.g. pressed during playback)
                self.key_queue.pop_front();
                continue;
            }

            if now >= front.from_us && now >= self.next_press_ready_us {
                front.seen_at_us = Some(now);
                return Some(front.choice);
            }

            return None;
        }
    }
}

impl Clock for SimBoard {
    fn now_ms(&self) -> u32 {
        (self.now_us / 1000) as u32
    }
}

impl Delay for SimBoard {
    fn sleep_us(&mut self, us: u32) {
        self.advance_us(u64::from(us));
    }
}

impl RgbLed for SimBoard {
    fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.rgb = (r, g, b);
        self.trace.record(TraceEvent::Rgb {
            at_us: self.now_us,
            rgb: (r, g, b),
        });
    }
}

impl Buzzer for SimBoard {
    fn set_high(&mut self) {
        self.buzzer_high = true;
        self.trace.record(TraceEvent::Buzzer {
            at_us: self.now_us,
            high: true,
        });
    }

    fn set_low(&mut self) {
        self.buzzer_high = false;
        self.trace.record(TraceEvent::Buzzer {
            at_us: self.now_us,
            high: false,
        });
    }
}

impl Keypad for SimBoard {
    fn scan(&mut self) -> Option<Choice> {
        self.advance_us(self.scan_cost_us);
        self.scan_queue()
    }
}

impl UnlockLatch for SimBoard {
    fn set_engaged(&mut self, engaged: bool) {
        self.unlock_engaged = engaged;
        self.trace.record(TraceEvent::Unlock {
            at_us: self.now_us,
            engaged,
        });
    }
}

impl UnlockButton for SimBoard {
    fn is_pressed(&self) -> bool {
        self.unlock_button_windows
            .iter()
            .any(|&(from, until)| (from..until).contains(&self.now_us))
    }
}

impl IdleSleep for SimBoard {
    fn idle_250ms(&mut self) {
        self.trace.record(TraceEvent::Idle { at_us: self.now_us });
        self.advance_us(250_000);
    }
}

impl RandomSource for SimBoard {
    fn seed(&mut self, value: u32) {
        // Xorshift must never be seeded with zero
        self.rng_state = if value == 0 { 1 } else { value };
    }

    fn next_in(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo < hi);
        let span = hi - lo;

        if let Some(draw) = self.rng_script.pop_front() {
            return lo + draw % span;
        }

        // Xorshift32 fallback
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        lo + x % span
    }
}
