//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in stacker-core:
//!
//! - Duty-cycle motor driver (open-loop ramp, bus-voltage compensation)
//! - GPIO presence-sensor sampler

#![no_std]
#![deny(unsafe_code)]

pub mod motor;
pub mod sensor;
