//! Exportable metric samples.
//!
//! A `MetricSample` is one observation ready for exposition: a stable metric
//! name, an f64 value, an ordered label list, and a constant help string. For
//! a given name the label key set never varies — the downstream registry
//! rejects mismatched label sets for the same family.

/// Label key carried by every device-scoped sample.
pub const DEVICE_LABEL: &str = "device_id";

/// One exportable observation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// Stable metric identifier (e.g. `tstick_battery_voltage`).
    pub name: String,
    pub value: f64,
    /// Ordered label pairs; keys are fixed per metric name.
    pub labels: Vec<(String, String)>,
    /// Constant per metric name.
    pub help: String,
}

/// Ordered samples produced from one incoming datagram. May be empty.
pub type MeasurementBatch = Vec<MetricSample>;

impl MetricSample {
    /// Unlabeled sample (used for the bridge liveness timestamp).
    pub fn new(name: impl Into<String>, value: f64, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            labels: Vec::new(),
            help: help.into(),
        }
    }

    /// Device-scoped sample carrying the `device_id` label.
    pub fn for_device(
        name: impl Into<String>,
        value: f64,
        device_id: &str,
        help: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            labels: vec![(DEVICE_LABEL.to_string(), device_id.to_string())],
            help: help.into(),
        }
    }
}
