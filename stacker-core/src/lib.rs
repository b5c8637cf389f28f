//! Board-agnostic core logic for the Stacker ball tower
//!
//! This crate contains all indexing logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (presence sensors, indexer motor, telemetry)
//! - The tower state machine and its transition table
//! - The tower entity owning the current/previous state pair
//! - Configuration type definitions and the live-tunable refresh seam

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod state;
pub mod telemetry;
pub mod traits;
