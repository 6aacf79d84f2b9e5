//! State machine definitions
//!
//! Two small machines: the supervisor mode (what the cabinet as a whole is
//! doing) and the game phase (where inside a round the game logic is).
//! All transition logic is pure; the blocking behavior lives in
//! [`crate::supervisor`] and [`crate::game`].

/// Top-level supervisor modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Dark LED, low-power polling, waiting for a player or the unlock key
    Attract,
    /// Game logic running (playback and echo phases)
    Game,
    /// Winner animation; strike relay energized for the hold window
    WinCelebration,
    /// Loser growl and red hold; relay stays released
    LosePenalty,
    /// Dedicated unlock input honored from attract; relay energized
    ManualUnlock,
}

/// Events that drive supervisor transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// A game key was pressed during attract
    KeyPressed,
    /// The manual-unlock button was pressed during attract
    UnlockRequested,
    /// Player echoed every round
    GameWon,
    /// Player mismatched or timed out
    GameLost,
    /// Winner animation and unlock hold finished
    CelebrationDone,
    /// Loser animation finished
    PenaltyDone,
    /// Manual unlock hold finished
    UnlockDone,
}

impl Mode {
    /// Check if this mode may energize the strike relay.
    ///
    /// The unlock line is written only inside these two modes and must be
    /// low everywhere else, including boot.
    pub fn unlock_allowed(&self) -> bool {
        matches!(self, Mode::WinCelebration | Mode::ManualUnlock)
    }

    /// Process an event and return the next mode.
    pub fn transition(self, event: ModeEvent) -> Self {
        use Mode::*;
        use ModeEvent::*;

        match (self, event) {
            // Attract transitions
            (Attract, KeyPressed) => Game,
            (Attract, UnlockRequested) => ManualUnlock,

            // Game transitions
            (Game, GameWon) => WinCelebration,
            (Game, GameLost) => LosePenalty,

            // Everything cycles back to attract
            (WinCelebration, CelebrationDone) => Attract,
            (LosePenalty, PenaltyDone) => Attract,
            (ManualUnlock, UnlockDone) => Attract,

            // Default: stay in current mode
            _ => self,
        }
    }
}

/// Phases of one game, round by round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Fresh game, empty sequence
    Idle,
    /// Drawing one random color onto the sequence
    Appending,
    /// Simon's turn: replaying the whole sequence
    Playback,
    /// Player's turn: echoing the sequence under the entry timeout
    Verify,
    /// Echo matched on the final round
    Won,
    /// Mismatch or entry timeout
    Lost,
}

/// Events that drive game-phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    /// Game entry; seed latched, sequence cleared
    Start,
    /// One color appended, round counter advanced
    ChoiceAppended,
    /// Full sequence replayed
    PlaybackFinished,
    /// Echo matched with rounds still to play
    EchoMatched,
    /// Echo matched on the winning round
    FinalEchoMatched,
    /// Wrong key or entry timeout
    EchoFailed,
}

impl Phase {
    /// Check if the game is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    /// Process an event and return the next phase.
    pub fn transition(self, event: PhaseEvent) -> Self {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Idle, Start) => Appending,
            (Appending, ChoiceAppended) => Playback,
            (Playback, PlaybackFinished) => Verify,
            (Verify, EchoMatched) => Appending,
            (Verify, FinalEchoMatched) => Won,
            (Verify, EchoFailed) => Lost,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attract_to_game() {
        assert_eq!(Mode::Attract.transition(ModeEvent::KeyPressed), Mode::Game);
    }

    #[test]
    fn test_attract_to_manual_unlock() {
        assert_eq!(
            Mode::Attract.transition(ModeEvent::UnlockRequested),
            Mode::ManualUnlock
        );
    }

    #[test]
    fn test_game_outcomes() {
        assert_eq!(Mode::Game.transition(ModeEvent::GameWon), Mode::WinCelebration);
        assert_eq!(Mode::Game.transition(ModeEvent::GameLost), Mode::LosePenalty);
    }

    #[test]
    fn test_everything_returns_to_attract() {
        assert_eq!(
            Mode::WinCelebration.transition(ModeEvent::CelebrationDone),
            Mode::Attract
        );
        assert_eq!(Mode::LosePenalty.transition(ModeEvent::PenaltyDone), Mode::Attract);
        assert_eq!(Mode::ManualUnlock.transition(ModeEvent::UnlockDone), Mode::Attract);
    }

    #[test]
    fn test_unrelated_events_do_not_move_modes() {
        assert_eq!(Mode::Attract.transition(ModeEvent::GameWon), Mode::Attract);
        assert_eq!(Mode::LosePenalty.transition(ModeEvent::KeyPressed), Mode::LosePenalty);
    }

    #[test]
    fn test_unlock_allowed() {
        assert!(Mode::WinCelebration.unlock_allowed());
        assert!(Mode::ManualUnlock.unlock_allowed());
        assert!(!Mode::Attract.unlock_allowed());
        assert!(!Mode::Game.unlock_allowed());
        assert!(!Mode::LosePenalty.unlock_allowed());
    }

    #[test]
    fn test_round_cycle() {
        let phase = Phase::Idle.transition(PhaseEvent::Start);
        assert_eq!(phase, Phase::Appending);

        let phase = phase.transition(PhaseEvent::ChoiceAppended);
        assert_eq!(phase, Phase::Playback);

        let phase = phase.transition(PhaseEvent::PlaybackFinished);
        assert_eq!(phase, Phase::Verify);

        // Non-final match loops back for another round
        let phase = phase.transition(PhaseEvent::EchoMatched);
        assert_eq!(phase, Phase::Appending);
    }

    #[test]
    fn test_verify_outcomes() {
        assert_eq!(Phase::Verify.transition(PhaseEvent::FinalEchoMatched), Phase::Won);
        assert_eq!(Phase::Verify.transition(PhaseEvent::EchoFailed), Phase::Lost);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
        assert!(!Phase::Verify.is_terminal());
        assert!(!Phase::Idle.is_terminal());
    }

    #[test]
    fn test_terminal_phases_are_sticky() {
        assert_eq!(Phase::Won.transition(PhaseEvent::EchoFailed), Phase::Won);
        assert_eq!(Phase::Lost.transition(PhaseEvent::Start), Phase::Lost);
    }
}
