//! Tower state machine
//!
//! Defines the authoritative runtime behavior of the indexing tower.
//! The state machine is explicit, finite, and deterministic: every
//! `(state, sensor triple)` pair maps to exactly one next state.

pub mod machine;
pub mod tower;
pub mod triple;

pub use machine::TowerState;
pub use tower::Tower;
pub use triple::SensorTriple;
