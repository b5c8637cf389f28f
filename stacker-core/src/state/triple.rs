//! Sensor triple sampled once per control tick

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One atomic reading of the three presence sensors along the indexing path.
///
/// The triple carries no history; it is recomputed every tick by the
/// sensor sampler and consumed by [`TowerState::transition`].
///
/// [`TowerState::transition`]: crate::state::TowerState::transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorTriple {
    /// Ball present at the lowest position (intake level)
    pub low: bool,
    /// Ball present at the middle position
    pub mid: bool,
    /// Ball present at the top position
    pub high: bool,
}

impl SensorTriple {
    /// Create a new triple from raw readings
    pub const fn new(low: bool, mid: bool, high: bool) -> Self {
        Self { low, mid, high }
    }

    /// All three sensors see a ball
    pub const fn all(&self) -> bool {
        self.low && self.mid && self.high
    }

    /// No sensor sees a ball
    pub const fn none(&self) -> bool {
        !self.low && !self.mid && !self.high
    }

    /// Check whether the triple matches one of the six expected stack
    /// patterns for 0-3 balls.
    ///
    /// Balls stack bottom-up and are raised as a column, so a ball at
    /// `high` without one at `mid` cannot occur on a healthy mechanism.
    pub const fn is_plausible(&self) -> bool {
        !(self.high && !self.mid)
    }
}
