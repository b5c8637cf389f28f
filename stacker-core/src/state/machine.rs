//! Tower state definition and transition table
//!
//! All indexing behavior is a function of the current state and the
//! latest sensor triple. Any pattern inconsistent with the expected
//! progression degrades to [`TowerState::Unknown`] instead of guessing,
//! so downstream logic never acts on an unverified ball count.

use super::triple::SensorTriple;

/// Tower states
///
/// `Raising1` and `Raising2` are representable but not produced by the
/// current transition table; they are reserved for a future table that
/// distinguishes in-flight raises, and are kept so external exhaustive
/// matchers do not break when that lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TowerState {
    /// Power-on state, nothing known yet
    Init,
    /// No sensor sees a ball; the tower is assumed empty
    Empty,
    /// First ball pushed into the lowest spot
    Loaded1,
    /// Raising the first ball (reserved, currently unreachable)
    Raising1,
    /// First ball parked at mid, low spot free for the second
    Ready2,
    /// Second ball pushed in under the first
    Loaded2,
    /// Raising the bottom two balls (reserved, currently unreachable)
    Raising2,
    /// Two balls parked at mid/high, low spot free for the third
    Ready3,
    /// All three positions occupied
    Loaded3,
    /// Sensor pattern inconsistent with the expected progression
    Unknown,
}

impl TowerState {
    /// Number of balls staged in this state, if determinate.
    ///
    /// Returns `None` for `Init` and `Unknown`: callers authorizing a
    /// shot or a reload must refuse to act on those.
    pub fn ball_count(&self) -> Option<u8> {
        match self {
            TowerState::Empty => Some(0),
            TowerState::Loaded1 | TowerState::Raising1 | TowerState::Ready2 => Some(1),
            TowerState::Loaded2 | TowerState::Raising2 | TowerState::Ready3 => Some(2),
            TowerState::Loaded3 => Some(3),
            TowerState::Init | TowerState::Unknown => None,
        }
    }

    /// Check if the tower should be at rest in this state
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            TowerState::Empty | TowerState::Ready2 | TowerState::Ready3 | TowerState::Loaded3
        )
    }

    /// Check if the state carries no usable ball count
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, TowerState::Init | TowerState::Unknown)
    }

    /// Telemetry label for this state
    pub fn name(&self) -> &'static str {
        match self {
            TowerState::Init => "INIT",
            TowerState::Empty => "EMPTY",
            TowerState::Loaded1 => "LOADED_1",
            TowerState::Raising1 => "RAISING_1",
            TowerState::Ready2 => "READY_2",
            TowerState::Loaded2 => "LOADED_2",
            TowerState::Raising2 => "RAISING_2",
            TowerState::Ready3 => "READY_3",
            TowerState::Loaded3 => "LOADED_3",
            TowerState::Unknown => "UNKNOWN",
        }
    }

    /// Process a sensor triple and return the next state
    ///
    /// This is the core transition logic. It is total: every
    /// `(state, triple)` pair yields a defined next state, and triples
    /// that match no condition leave the state unchanged.
    ///
    /// Checks within a state are ordered and the first match wins; the
    /// ordering is load-bearing for `Ready3`, where the full-load check
    /// is evaluated before the loss-of-signal check.
    pub fn transition(self, t: SensorTriple) -> Self {
        use TowerState::*;

        match self {
            // Likeliest startup configurations are a full or an empty
            // tower; anything else needs re-derivation.
            Init => {
                if t.all() {
                    Loaded3
                } else if t.none() {
                    Empty
                } else {
                    Unknown
                }
            }

            // Wait for a ball at the intake. A reading at mid or high
            // with an empty tower is unexpected.
            Empty => {
                if t.mid || t.high {
                    Unknown
                } else if t.low {
                    Loaded1
                } else {
                    Empty
                }
            }

            // Tower lifts until the first ball is seen at mid. A high
            // reading here means two sensors see one ball, or worse.
            Loaded1 => {
                if t.high {
                    Unknown
                } else if !t.low && t.mid {
                    Ready2
                } else {
                    Loaded1
                }
            }

            // Holding one ball at mid; wait for the second at the intake.
            Ready2 => {
                if t.low {
                    Loaded2
                } else {
                    Ready2
                }
            }

            // Lifting two balls until they park at mid and high.
            Loaded2 => {
                if !t.low && t.mid && t.high {
                    Ready3
                } else {
                    Loaded2
                }
            }

            // Two balls parked at the top; wait for the third. Losing
            // either of the top readings means we lost track of a ball.
            Ready3 => {
                if t.all() {
                    Loaded3
                } else if !t.mid || !t.high {
                    Unknown
                } else {
                    Ready3
                }
            }

            // Full tower must keep all three readings.
            Loaded3 => {
                if !t.all() {
                    Unknown
                } else {
                    Loaded3
                }
            }

            // Re-derive the most specific plausible state directly from
            // the raw triple once the sensors stabilize.
            Unknown => Self::rederive(t),

            // No table rows yet; hold until a future table produces them.
            Raising1 | Raising2 => self,
        }
    }

    /// Map a raw triple to the plausible state it uniquely identifies.
    ///
    /// The two patterns with a high reading and no mid reading identify
    /// nothing; the machine stays in `Unknown` for those.
    fn rederive(t: SensorTriple) -> Self {
        use TowerState::*;

        match (t.low, t.mid, t.high) {
            (false, false, false) => Empty,
            (true, false, false) => Loaded1,
            (false, true, false) => Ready2,
            (true, true, false) => Loaded2,
            (false, true, true) => Ready3,
            (true, true, true) => Loaded3,
            _ => Unknown,
        }
    }
}
