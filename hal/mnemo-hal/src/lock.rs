//! Electric-strike relay and manual-unlock button

/// Relay line driving the electric strike.
///
/// Active-high at this interface. The line must be low on boot; only the
/// supervisor writes it.
pub trait UnlockLatch {
    /// Energize (`true`) or release (`false`) the strike relay.
    fn set_engaged(&mut self, engaged: bool);
}

/// Dedicated manual-unlock input.
///
/// The physical pin is active-low with a pull-up; the driver hides the
/// inversion and reports active-true.
pub trait UnlockButton {
    /// True while the unlock button is held.
    fn is_pressed(&self) -> bool;
}
