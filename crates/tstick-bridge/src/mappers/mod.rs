//! Built-in sample mappers, one per measurement category.
//!
//! Metric names, help strings, and the `device_id` label are a stable
//! contract with downstream dashboards; do not rename them.

pub mod battery;
pub mod orientation;
pub mod raw;

pub use battery::BatteryMapper;
pub use orientation::YprMapper;
pub use raw::RawMapper;

use tstick_core::error::{BridgeError, Result};

/// Fetch argument `idx` or fail with the shortfall the router logs.
pub(crate) fn arg(args: &[f64], idx: usize, property: &str, expected: usize) -> Result<f64> {
    args.get(idx)
        .copied()
        .ok_or_else(|| BridgeError::ArgumentCount {
            property: property.to_string(),
            expected,
            got: args.len(),
        })
}
