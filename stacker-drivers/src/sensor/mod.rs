//! Presence sensor samplers

pub mod gpio;

pub use gpio::{GpioSensors, PinPolarity};
