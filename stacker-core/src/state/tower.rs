//! Tower entity owning the current/previous state pair

use super::machine::TowerState;
use super::triple::SensorTriple;

/// The indexing tower.
///
/// Sole owner of the `current`/`previous` state pair: nothing else
/// mutates it except through [`advance`] or the explicit [`set_state`]
/// used by the recovery path and by tests. Constructed once at system
/// start in [`TowerState::Init`] and ticked for the life of the process.
///
/// [`advance`]: Tower::advance
/// [`set_state`]: Tower::set_state
#[derive(Debug, Clone)]
pub struct Tower {
    current: TowerState,
    previous: TowerState,
}

impl Default for Tower {
    fn default() -> Self {
        Self::new()
    }
}

impl Tower {
    /// Create a new tower in the `Init` state
    pub fn new() -> Self {
        Self {
            current: TowerState::Init,
            previous: TowerState::Init,
        }
    }

    /// Consume the latest sensor triple and commit the next state.
    ///
    /// `previous` is updated to the pre-call `current` before the
    /// commit. Pure in `(current, triple)`; no hidden history beyond
    /// the single `previous` slot.
    pub fn advance(&mut self, triple: SensorTriple) -> TowerState {
        self.set_state(self.current.transition(triple));
        self.current
    }

    /// Force-set the current state.
    ///
    /// Used by the recovery path and test injection, never by normal
    /// ticking.
    pub fn set_state(&mut self, state: TowerState) {
        self.previous = self.current;
        self.current = state;
    }

    /// Operator "reset counter": assume the tower has been cleared.
    pub fn reset(&mut self) {
        self.set_state(TowerState::Empty);
    }

    /// Current state
    pub fn state(&self) -> TowerState {
        self.current
    }

    /// State before the last `advance`/`set_state`
    pub fn previous_state(&self) -> TowerState {
        self.previous
    }

    /// Staged ball count, `None` while ambiguous
    pub fn ball_count(&self) -> Option<u8> {
        self.current.ball_count()
    }
}
