//! Board-agnostic control loop for the Stacker ball tower
//!
//! Composes the sensor sampler, the tower state machine, the motor
//! boundary, and the telemetry sink into one synchronous per-tick
//! update, driven by an external scheduler (nominally 50 Hz). The
//! embedding owns the timer and the hardware; this crate owns the
//! policy.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod controller;

pub use command::OperatorInput;
pub use controller::{Controller, AUTO_RAISE_TICKS};
