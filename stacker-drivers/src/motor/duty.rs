//! Open-loop duty-cycle motor driver
//!
//! Drives the tower's indexing motor through a signed duty cycle in
//! [-1, 1] with:
//! - open-loop ramping (slew-rate limit from zero to full output)
//! - bus-voltage compensation against a nominal supply voltage
//!
//! # Usage
//!
//! The driver is updated by calling `update_with_delta()` periodically.
//! This returns the output duty to apply to the PWM/controller output.
//!
//! ```ignore
//! let mut motor = DutyMotor::new(DutyMotorConfig::default());
//! motor.set_duty(0.3);
//!
//! // In the periodic control tick:
//! motor.update_bus_voltage(bus.volts());
//! let duty = motor.update_with_delta(20);
//! pwm.set_output(duty);
//! ```

use stacker_core::traits::IndexerMotor;

/// Duty motor driver configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyMotorConfig {
    /// Minimum time from rest to full output in ms (0 = instant)
    pub ramp_ms: u16,
    /// Supply voltage the duty cycle is calibrated against
    pub nominal_voltage: f32,
}

impl Default for DutyMotorConfig {
    fn default() -> Self {
        Self {
            ramp_ms: 500,
            nominal_voltage: 12.0,
        }
    }
}

/// Open-loop duty-cycle motor driver state.
///
/// `duty()` reports the commanded target; the ramped and
/// voltage-compensated value is what `update_with_delta()` returns for
/// the output stage.
pub struct DutyMotor {
    config: DutyMotorConfig,
    /// Commanded duty in [-1, 1]
    target: f32,
    /// Ramped duty actually applied (before compensation)
    applied: f32,
    /// Last measured bus voltage, if any reading has arrived
    bus_voltage: Option<f32>,
    /// Last reported velocity (telemetry only)
    velocity: f32,
}

impl DutyMotor {
    /// Create a new driver at rest
    pub fn new(config: DutyMotorConfig) -> Self {
        Self {
            config,
            target: 0.0,
            applied: 0.0,
            bus_voltage: None,
            velocity: 0.0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DutyMotorConfig {
        &self.config
    }

    /// Ramped duty currently applied, before compensation
    pub fn applied_duty(&self) -> f32 {
        self.applied
    }

    /// Feed a bus voltage measurement.
    ///
    /// Compensation stays bypassed until the first measurement arrives.
    pub fn update_bus_voltage(&mut self, volts: f32) {
        self.bus_voltage = Some(volts);
    }

    /// Feed a velocity measurement from the feedback channel
    pub fn report_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Move `current` toward `target` by at most `step`
    fn toward(current: f32, target: f32, step: f32) -> f32 {
        if target > current {
            if target - current <= step {
                target
            } else {
                current + step
            }
        } else if current - target <= step {
            target
        } else {
            current - step
        }
    }

    /// Scale the applied duty so output power matches the nominal
    /// supply despite battery sag, clamped back to full scale.
    fn compensate(&self, duty: f32) -> f32 {
        match self.bus_voltage {
            Some(bus) if bus > 0.1 => (duty * self.config.nominal_voltage / bus).clamp(-1.0, 1.0),
            _ => duty,
        }
    }

    /// Update for a specific time delta (in ms).
    ///
    /// Slews the applied duty toward the target at the configured ramp
    /// rate and returns the voltage-compensated output duty.
    pub fn update_with_delta(&mut self, delta_ms: u32) -> f32 {
        if self.config.ramp_ms == 0 {
            self.applied = self.target;
        } else {
            let step = delta_ms as f32 / self.config.ramp_ms as f32;
            self.applied = Self::toward(self.applied, self.target, step);
        }

        self.compensate(self.applied)
    }
}

impl IndexerMotor for DutyMotor {
    fn set_duty(&mut self, duty: f32) {
        self.target = duty.clamp(-1.0, 1.0);
    }

    fn duty(&self) -> f32 {
        self.target
    }

    fn velocity(&self) -> f32 {
        self.velocity
    }
}
