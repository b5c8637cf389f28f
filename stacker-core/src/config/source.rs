//! Live configuration refresh seam

use super::types::TowerConfig;

/// External source of tunable parameters (dashboard, flash, test rig).
///
/// Polled once per control tick. Returning `None` means "no reading
/// this tick"; the caller keeps its current values, so an absent or
/// silent source leaves the defaults in effect.
pub trait ConfigSource {
    /// Fetch the latest tunables, if any
    fn refresh(&mut self) -> Option<TowerConfig>;
}

/// Source that never supplies values; the defaults stay in effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConfig;

impl ConfigSource for StaticConfig {
    fn refresh(&mut self) -> Option<TowerConfig> {
        None
    }
}
