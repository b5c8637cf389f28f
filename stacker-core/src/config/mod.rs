//! Configuration types
//!
//! Live-tunable indexing parameters, refreshed once per tick from an
//! external source and snapshot-able as postcard binary data.

pub mod source;
pub mod types;

pub use source::{ConfigSource, StaticConfig};
pub use types::TowerConfig;
