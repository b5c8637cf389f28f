//! Telemetry sink trait

use crate::telemetry::SampleValue;

/// Fire-and-forget sink for named telemetry samples.
///
/// The core emits raw sensor booleans, the current state name, and
/// motor duty/velocity once per tick regardless of transitions. There
/// is no acknowledgement or backpressure; a sink that drops a sample
/// drops it silently, which is non-fatal by contract.
pub trait TelemetrySink {
    /// Record one named sample
    fn record(&mut self, key: &'static str, value: SampleValue);
}
