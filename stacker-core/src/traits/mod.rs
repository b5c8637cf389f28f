//! Hardware abstraction traits
//!
//! These traits define the interface between the indexing logic and
//! hardware-specific implementations.

pub mod motor;
pub mod sensor;
pub mod telemetry;

pub use motor::{IndexerMotor, MotorIntent};
pub use sensor::PresenceSensors;
pub use telemetry::TelemetrySink;
