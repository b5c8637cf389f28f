//! Indexer motor boundary
//!
//! The tower drives one signed-duty-cycle actuator. The core only
//! decides intent (`Up`, `Down`, `Stop`); the mapping to a concrete
//! duty cycle goes through the live-tunable [`TowerConfig`].
//!
//! [`TowerConfig`]: crate::config::TowerConfig

use crate::config::TowerConfig;

/// Motor intent derived from tower state and operator commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorIntent {
    /// Index upward at the configured raise duty
    Up,
    /// Index downward at the configured lower duty
    Down,
    /// Hold at rest. Default whenever no explicit command is active.
    #[default]
    Stop,
}

impl MotorIntent {
    /// Map this intent to a duty cycle using the current tunables
    pub fn duty_for(&self, config: &TowerConfig) -> f32 {
        match self {
            MotorIntent::Up => config.up_speed,
            MotorIntent::Down => config.down_speed,
            MotorIntent::Stop => 0.0,
        }
    }
}

/// Signed duty-cycle motor boundary.
///
/// Implementations clamp duty to [-1, 1]. Re-asserting the same duty
/// across ticks is idempotent. `velocity` exists for telemetry only
/// and reports 0.0 when the hardware has no feedback channel.
pub trait IndexerMotor {
    /// Command a signed duty cycle in [-1, 1]
    fn set_duty(&mut self, duty: f32);

    /// Last commanded duty cycle
    fn duty(&self) -> f32;

    /// Measured velocity, hardware units
    fn velocity(&self) -> f32;

    /// Command the motor to rest
    fn stop(&mut self) {
        self.set_duty(0.0);
    }
}
