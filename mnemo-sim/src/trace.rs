//! Timestamped output trace and its query helpers

/// One recorded output write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// RGB LED write.
    Rgb { at_us: u64, rgb: (u8, u8, u8) },
    /// Buzzer pin write.
    Buzzer { at_us: u64, high: bool },
    /// Strike relay write.
    Unlock { at_us: u64, engaged: bool },
    /// One ~250 ms low-power idle chunk entered.
    Idle { at_us: u64 },
}

/// Everything the simulated board's outputs did, in order.
#[derive(Debug, Default)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// All recorded events.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Closed intervals during which the strike relay was energized.
    ///
    /// A window still open at the end of the trace is not returned; check
    /// the live relay state for that.
    pub fn unlock_windows(&self) -> Vec<(u64, u64)> {
        let mut windows = Vec::new();
        let mut open: Option<u64> = None;

        for event in &self.events {
            if let TraceEvent::Unlock { at_us, engaged } = *event {
                match (open, engaged) {
                    (None, true) => open = Some(at_us),
                    (Some(start), false) => {
                        windows.push((start, at_us));
                        open = None;
                    }
                    // Redundant writes keep the current window
                    _ => {}
                }
            }
        }

        windows
    }

    /// All buzzer edge timestamps in `[from_us, to_us)`.
    pub fn buzzer_edges_between(&self, from_us: u64, to_us: u64) -> Vec<(u64, bool)> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                TraceEvent::Buzzer { at_us, high } if (from_us..to_us).contains(&at_us) => {
                    Some((at_us, high))
                }
                _ => None,
            })
            .collect()
    }

    /// Number of rising buzzer edges in `[from_us, to_us)`; one per
    /// square-wave period.
    pub fn buzzer_pulses_between(&self, from_us: u64, to_us: u64) -> usize {
        self.buzzer_edges_between(from_us, to_us)
            .iter()
            .filter(|(_, high)| *high)
            .count()
    }

    /// Rising buzzer edges over the whole trace.
    pub fn buzzer_pulses(&self) -> usize {
        self.buzzer_pulses_between(0, u64::MAX)
    }

    /// Intervals between consecutive buzzer writes in `[from_us, to_us)`.
    ///
    /// For a clean square wave every interval equals the half-period.
    pub fn buzzer_intervals_between(&self, from_us: u64, to_us: u64) -> Vec<u64> {
        self.buzzer_edges_between(from_us, to_us)
            .windows(2)
            .map(|pair| pair[1].0 - pair[0].0)
            .collect()
    }

    /// All RGB writes, in order.
    pub fn rgb_writes(&self) -> Vec<(u64, (u8, u8, u8))> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                TraceEvent::Rgb { at_us, rgb } => Some((at_us, rgb)),
                _ => None,
            })
            .collect()
    }

    /// RGB writes that lit the LED (anything but off).
    pub fn lit_writes(&self) -> Vec<(u64, (u8, u8, u8))> {
        self.rgb_writes()
            .into_iter()
            .filter(|&(_, rgb)| rgb != (0, 0, 0))
            .collect()
    }

    /// What the LED showed at `at_us` (the most recent write, off before
    /// any write).
    pub fn rgb_at(&self, at_us: u64) -> (u8, u8, u8) {
        self.rgb_writes()
            .into_iter()
            .take_while(|&(t, _)| t <= at_us)
            .last()
            .map(|(_, rgb)| rgb)
            .unwrap_or((0, 0, 0))
    }

    /// How many low-power idle chunks were entered.
    pub fn idle_chunks(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::Idle { .. }))
            .count()
    }
}
