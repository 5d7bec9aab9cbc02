use tstick_core::error::Result;
use tstick_core::protocol::address::Category;
use tstick_core::sample::{MeasurementBatch, MetricSample};

use crate::dispatch::SampleMapper;
use crate::mappers::arg;

/// Battery telemetry: one sample per message, `tstick_battery_<property>`.
pub struct BatteryMapper;

impl SampleMapper for BatteryMapper {
    fn category(&self) -> Category {
        Category::Battery
    }

    fn map(&self, device_id: &str, property: &str, args: &[f64]) -> Result<MeasurementBatch> {
        let (name, help) = match property {
            "current" => ("tstick_battery_current", "Battery current in mA"),
            "voltage" => ("tstick_battery_voltage", "Battery voltage in V"),
            "percentage" => ("tstick_battery_percentage", "Battery percentage"),
            // Firmware spelling varies; the metric name cannot carry a '-'.
            "timetoempty" | "time-to-empty" => (
                "tstick_battery_timetoempty",
                "Estimated battery time to empty in minutes",
            ),
            _ => return Ok(Vec::new()),
        };

        let value = arg(args, 0, property, 1)?;
        Ok(vec![MetricSample::for_device(name, value, device_id, help)])
    }
}
