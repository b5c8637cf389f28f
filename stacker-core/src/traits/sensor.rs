//! Presence sensor sampler trait

use crate::state::SensorTriple;

/// Sampler for the three presence sensors along the indexing path.
///
/// `sample` must be callable at arbitrary frequency and must not
/// block. The read is infallible by contract: a disconnected sensor is
/// read as a determinate boolean by the underlying hardware layer, and
/// sensor-failure detection is deliberately not modeled here.
pub trait PresenceSensors {
    /// Read all three sensors atomically within one tick
    fn sample(&mut self) -> SensorTriple;
}
