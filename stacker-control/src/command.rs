//! Operator command boundary
//!
//! Discrete button events from the human-input layer. Hold semantics
//! live in the input layer: it emits `RaiseHeld`/`LowerHeld` while the
//! button is down and `Released` once it comes back up.

/// Operator-triggered events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorInput {
    /// "Hold to raise" button is down
    RaiseHeld,
    /// "Hold to lower" button is down
    LowerHeld,
    /// Both hold buttons released
    Released,
    /// Reset the staged-ball counter (assume the tower was cleared)
    ResetCounter,
}

impl OperatorInput {
    /// Check if this event asserts a motor command
    pub fn is_motor_command(&self) -> bool {
        matches!(
            self,
            OperatorInput::RaiseHeld | OperatorInput::LowerHeld | OperatorInput::Released
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motor_command_predicate() {
        assert!(OperatorInput::RaiseHeld.is_motor_command());
        assert!(OperatorInput::LowerHeld.is_motor_command());
        assert!(OperatorInput::Released.is_motor_command());
        assert!(!OperatorInput::ResetCounter.is_motor_command());
    }
}
