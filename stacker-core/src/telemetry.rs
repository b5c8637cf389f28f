//! Telemetry sample types
//!
//! Plain-data records built once per tick by the control layer and
//! handed to whatever sink the embedding provides.

use heapless::Vec;

/// Samples emitted per tick (three sensors, state, duty, velocity)
pub const MAX_SAMPLES: usize = 8;

/// Well-known sample keys
pub mod keys {
    pub const TOWER_LOW: &str = "tower/low";
    pub const TOWER_MID: &str = "tower/mid";
    pub const TOWER_HIGH: &str = "tower/high";
    pub const TOWER_STATE: &str = "tower/state";
    pub const TOWER_DUTY: &str = "tower/duty";
    pub const TOWER_VEL: &str = "tower/vel";
}

/// One telemetry value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleValue {
    Bool(bool),
    F32(f32),
    Text(&'static str),
}

/// One named sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub key: &'static str,
    pub value: SampleValue,
}

impl Sample {
    pub const fn new(key: &'static str, value: SampleValue) -> Self {
        Self { key, value }
    }
}

/// The samples produced by one control tick
pub type SampleSet = Vec<Sample, MAX_SAMPLES>;
