//! Per-tick tower controller
//!
//! One `tick()` per control period: refresh tunables, sample the
//! sensors, advance the state machine, resolve motor intent, apply the
//! duty cycle, and stage the tick's telemetry. Motor intent resolves
//! in fixed precedence: an operator hold wins, then the bounded
//! auto-raise, then the default `Stop`.

use heapless::Vec;

use stacker_core::config::{ConfigSource, TowerConfig};
use stacker_core::state::{SensorTriple, Tower, TowerState};
use stacker_core::telemetry::{keys, Sample, SampleSet, SampleValue};
use stacker_core::traits::{IndexerMotor, MotorIntent, PresenceSensors, TelemetrySink};

use crate::command::OperatorInput;

/// Auto-raise bound: 25 ticks = 0.5 s at the nominal 50 Hz control tick
pub const AUTO_RAISE_TICKS: u8 = 25;

/// Controller coordinating the tower, its motor, and the operator
pub struct Controller {
    /// The tower state pair, owned exclusively by this controller
    tower: Tower,
    /// Current tunables, refreshed each tick
    config: TowerConfig,
    /// Latched operator intent; `Stop` when no hold is active
    held: MotorIntent,
    /// Whether the auto-raise composition is enabled
    auto_raise: bool,
    /// Remaining auto-raise ticks, 0 when idle
    auto_raise_left: u8,
    /// Telemetry staged by the last tick
    samples: SampleSet,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Create a manual-only controller with default tunables
    pub fn new() -> Self {
        Self {
            tower: Tower::new(),
            config: TowerConfig::default(),
            held: MotorIntent::Stop,
            auto_raise: false,
            auto_raise_left: 0,
            samples: Vec::new(),
        }
    }

    /// Enable the bounded auto-raise when a ball arrives at the intake
    pub fn with_auto_raise(mut self) -> Self {
        self.auto_raise = true;
        self
    }

    /// Current tower state
    pub fn state(&self) -> TowerState {
        self.tower.state()
    }

    /// Tower state before the last advance
    pub fn previous_state(&self) -> TowerState {
        self.tower.previous_state()
    }

    /// Staged ball count, `None` while ambiguous
    pub fn ball_count(&self) -> Option<u8> {
        self.tower.ball_count()
    }

    /// Tunables currently in effect
    pub fn config(&self) -> &TowerConfig {
        &self.config
    }

    /// Telemetry staged by the last tick
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Latch "index upward" until `stop()`
    pub fn up(&mut self) {
        self.held = MotorIntent::Up;
    }

    /// Latch "index downward" until `stop()`
    pub fn down(&mut self) {
        self.held = MotorIntent::Down;
    }

    /// Release any held motor command
    pub fn stop(&mut self) {
        self.held = MotorIntent::Stop;
    }

    /// Operator reset: assume the tower has been cleared
    pub fn reset(&mut self) {
        self.tower.reset();
    }

    /// Map an operator event onto the command methods
    pub fn handle_input(&mut self, input: OperatorInput) {
        match input {
            OperatorInput::RaiseHeld => self.up(),
            OperatorInput::LowerHeld => self.down(),
            OperatorInput::Released => self.stop(),
            OperatorInput::ResetCounter => self.reset(),
        }
    }

    /// Run one control tick.
    ///
    /// Synchronous and non-blocking; the caller owns the period. The
    /// same command re-asserted across ticks has no effect beyond
    /// re-asserting the duty cycle.
    pub fn tick<S, M, C>(&mut self, sensors: &mut S, motor: &mut M, config: &mut C) -> TowerState
    where
        S: PresenceSensors,
        M: IndexerMotor,
        C: ConfigSource,
    {
        if let Some(tunables) = config.refresh() {
            self.config = tunables.validated();
        }

        let triple = sensors.sample();
        let state = self.tower.advance(triple);

        let intent = self.resolve_intent(state);
        motor.set_duty(intent.duty_for(&self.config));

        self.stage_telemetry(triple, state, motor);
        state
    }

    /// Publish the staged telemetry to a sink (fire-and-forget)
    pub fn publish<T: TelemetrySink>(&self, sink: &mut T) {
        for sample in &self.samples {
            sink.record(sample.key, sample.value);
        }
    }

    /// Resolve this tick's motor intent. Operator hold wins; the
    /// bounded auto-raise runs only with a determinate, unsettled
    /// state; otherwise the default is `Stop`.
    fn resolve_intent(&mut self, state: TowerState) -> MotorIntent {
        if self.held != MotorIntent::Stop {
            // Operator override cancels any pending auto-raise
            self.auto_raise_left = 0;
            return self.held;
        }

        if self.auto_raise {
            self.update_auto_raise(state);
            if self.auto_raise_left > 0 {
                self.auto_raise_left -= 1;
                return MotorIntent::Up;
            }
        }

        MotorIntent::Stop
    }

    /// Start the raise window when a ball newly lands at the intake;
    /// end it early once the tower settles or loses track.
    fn update_auto_raise(&mut self, state: TowerState) {
        let arrived = matches!(state, TowerState::Loaded1 | TowerState::Loaded2)
            && state != self.tower.previous_state();

        if arrived {
            self.auto_raise_left = AUTO_RAISE_TICKS;
        } else if state.is_settled() || state.is_ambiguous() {
            self.auto_raise_left = 0;
        }
    }

    fn stage_telemetry<M: IndexerMotor>(
        &mut self,
        triple: SensorTriple,
        state: TowerState,
        motor: &M,
    ) {
        self.samples.clear();

        let samples = [
            Sample::new(keys::TOWER_LOW, SampleValue::Bool(triple.low)),
            Sample::new(keys::TOWER_MID, SampleValue::Bool(triple.mid)),
            Sample::new(keys::TOWER_HIGH, SampleValue::Bool(triple.high)),
            Sample::new(keys::TOWER_STATE, SampleValue::Text(state.name())),
            Sample::new(keys::TOWER_DUTY, SampleValue::F32(motor.duty())),
            Sample::new(keys::TOWER_VEL, SampleValue::F32(motor.velocity())),
        ];

        for sample in samples {
            // Capacity is MAX_SAMPLES >= 6; push cannot fail here
            let _ = self.samples.push(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacker_core::config::StaticConfig;

    /// Sampler returning a fixed triple until changed
    struct FixedSensors(SensorTriple);

    impl PresenceSensors for FixedSensors {
        fn sample(&mut self) -> SensorTriple {
            self.0
        }
    }

    /// Motor that records the last commanded duty
    #[derive(Default)]
    struct RecordingMotor {
        duty: f32,
        velocity: f32,
    }

    impl IndexerMotor for RecordingMotor {
        fn set_duty(&mut self, duty: f32) {
            self.duty = duty.clamp(-1.0, 1.0);
        }

        fn duty(&self) -> f32 {
            self.duty
        }

        fn velocity(&self) -> f32 {
            self.velocity
        }
    }

    /// Config source that supplies a value exactly once
    struct OneShotConfig(Option<TowerConfig>);

    impl ConfigSource for OneShotConfig {
        fn refresh(&mut self) -> Option<TowerConfig> {
            self.0.take()
        }
    }

    #[derive(Default)]
    struct CollectingSink {
        records: Vec<(&'static str, SampleValue), 16>,
    }

    impl TelemetrySink for CollectingSink {
        fn record(&mut self, key: &'static str, value: SampleValue) {
            let _ = self.records.push((key, value));
        }
    }

    fn empty_sensors() -> FixedSensors {
        FixedSensors(SensorTriple::default())
    }

    #[test]
    fn test_default_action_is_stop() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();

        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, 0.0);
        assert_eq!(ctrl.state(), TowerState::Empty);
    }

    #[test]
    fn test_hold_to_raise_and_release() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();

        ctrl.handle_input(OperatorInput::RaiseHeld);
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, ctrl.config().up_speed);

        // Re-asserting the hold is idempotent
        ctrl.handle_input(OperatorInput::RaiseHeld);
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, ctrl.config().up_speed);

        ctrl.handle_input(OperatorInput::Released);
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, 0.0);
    }

    #[test]
    fn test_hold_to_lower() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();

        ctrl.handle_input(OperatorInput::LowerHeld);
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, ctrl.config().down_speed);
    }

    #[test]
    fn test_motor_commands_independent_of_state() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();

        // Force an ambiguous state: manual drive must still work
        let mut sensors = FixedSensors(SensorTriple::new(false, false, true));
        ctrl.tick(&mut sensors, &mut motor, &mut StaticConfig);
        assert_eq!(ctrl.state(), TowerState::Unknown);

        ctrl.up();
        ctrl.tick(&mut sensors, &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, ctrl.config().up_speed);

        ctrl.down();
        ctrl.tick(&mut sensors, &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, ctrl.config().down_speed);

        ctrl.stop();
        ctrl.tick(&mut sensors, &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, 0.0);
    }

    #[test]
    fn test_reset_counter() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();

        let mut sensors = FixedSensors(SensorTriple::new(true, false, true));
        ctrl.tick(&mut sensors, &mut motor, &mut StaticConfig);
        assert_eq!(ctrl.ball_count(), None);

        ctrl.handle_input(OperatorInput::ResetCounter);
        assert_eq!(ctrl.state(), TowerState::Empty);
        assert_eq!(ctrl.ball_count(), Some(0));
    }

    #[test]
    fn test_config_refresh_applies_same_tick() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();
        let mut config = OneShotConfig(Some(TowerConfig {
            up_speed: 0.5,
            down_speed: -0.2,
        }));

        ctrl.up();
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut config);
        assert_eq!(motor.duty, 0.5);

        // Source went silent: values stay in effect
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut config);
        assert_eq!(motor.duty, 0.5);
    }

    #[test]
    fn test_config_refresh_is_validated() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();
        let mut config = OneShotConfig(Some(TowerConfig {
            up_speed: 5.0,
            down_speed: 1.0,
        }));

        ctrl.up();
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut config);
        assert_eq!(motor.duty, 1.0);
        assert_eq!(ctrl.config().down_speed, 0.0);
    }

    #[test]
    fn test_telemetry_every_tick() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();
        motor.velocity = 7.5;

        let mut sensors = FixedSensors(SensorTriple::new(true, false, false));
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        ctrl.tick(&mut sensors, &mut motor, &mut StaticConfig);

        let mut sink = CollectingSink::default();
        ctrl.publish(&mut sink);

        assert_eq!(sink.records.len(), 6);
        assert!(sink
            .records
            .contains(&(keys::TOWER_LOW, SampleValue::Bool(true))));
        assert!(sink
            .records
            .contains(&(keys::TOWER_STATE, SampleValue::Text("LOADED_1"))));
        assert!(sink
            .records
            .contains(&(keys::TOWER_VEL, SampleValue::F32(7.5))));
    }

    #[test]
    fn test_auto_raise_runs_and_times_out() {
        let mut ctrl = Controller::new().with_auto_raise();
        let mut motor = RecordingMotor::default();

        // Reach Empty, then a ball arrives at the intake
        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        let mut arrived = FixedSensors(SensorTriple::new(true, false, false));

        ctrl.tick(&mut arrived, &mut motor, &mut StaticConfig);
        assert_eq!(ctrl.state(), TowerState::Loaded1);
        assert_eq!(motor.duty, ctrl.config().up_speed);

        // Sensors stuck: the raise window expires after its bound
        for _ in 1..AUTO_RAISE_TICKS {
            ctrl.tick(&mut arrived, &mut motor, &mut StaticConfig);
            assert_eq!(motor.duty, ctrl.config().up_speed);
        }
        ctrl.tick(&mut arrived, &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, 0.0);
    }

    #[test]
    fn test_auto_raise_ends_when_settled() {
        let mut ctrl = Controller::new().with_auto_raise();
        let mut motor = RecordingMotor::default();

        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        ctrl.tick(
            &mut FixedSensors(SensorTriple::new(true, false, false)),
            &mut motor,
            &mut StaticConfig,
        );
        assert_eq!(motor.duty, ctrl.config().up_speed);

        // Ball reaches mid: Ready2 is settled, raising stops at once
        ctrl.tick(
            &mut FixedSensors(SensorTriple::new(false, true, false)),
            &mut motor,
            &mut StaticConfig,
        );
        assert_eq!(ctrl.state(), TowerState::Ready2);
        assert_eq!(motor.duty, 0.0);
    }

    #[test]
    fn test_auto_raise_never_runs_while_ambiguous() {
        let mut ctrl = Controller::new().with_auto_raise();
        let mut motor = RecordingMotor::default();

        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        ctrl.tick(
            &mut FixedSensors(SensorTriple::new(true, false, false)),
            &mut motor,
            &mut StaticConfig,
        );
        assert_eq!(motor.duty, ctrl.config().up_speed);

        // Tracking lost mid-raise: the window is abandoned
        ctrl.tick(
            &mut FixedSensors(SensorTriple::new(false, false, true)),
            &mut motor,
            &mut StaticConfig,
        );
        assert_eq!(ctrl.state(), TowerState::Unknown);
        assert_eq!(motor.duty, 0.0);
    }

    #[test]
    fn test_manual_hold_overrides_auto_raise() {
        let mut ctrl = Controller::new().with_auto_raise();
        let mut motor = RecordingMotor::default();

        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        let mut arrived = FixedSensors(SensorTriple::new(true, false, false));
        ctrl.tick(&mut arrived, &mut motor, &mut StaticConfig);

        // Operator takes over downward: manual wins and cancels auto
        ctrl.handle_input(OperatorInput::LowerHeld);
        ctrl.tick(&mut arrived, &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, ctrl.config().down_speed);

        ctrl.handle_input(OperatorInput::Released);
        ctrl.tick(&mut arrived, &mut motor, &mut StaticConfig);
        assert_eq!(motor.duty, 0.0);
    }

    #[test]
    fn test_previous_state_visible_to_embedding() {
        let mut ctrl = Controller::new();
        let mut motor = RecordingMotor::default();

        ctrl.tick(&mut empty_sensors(), &mut motor, &mut StaticConfig);
        assert_eq!(ctrl.previous_state(), TowerState::Init);
        assert_eq!(ctrl.state(), TowerState::Empty);
    }
}
