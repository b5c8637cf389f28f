//! Motor drivers

pub mod duty;

pub use duty::{DutyMotor, DutyMotorConfig};
