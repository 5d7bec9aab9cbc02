use tstick_core::error::Result;
use tstick_core::protocol::address::Category;
use tstick_core::sample::{MeasurementBatch, MetricSample};

use crate::dispatch::SampleMapper;
use crate::mappers::arg;

const YPR: [(&str, &str); 3] = [
    ("tstick_yaw", "T-Stick yaw in radians"),
    ("tstick_pitch", "T-Stick pitch in radians"),
    ("tstick_roll", "T-Stick roll in radians"),
];

/// Orientation telemetry: yaw, pitch, roll from args[0..3], unconditionally.
/// The address suffix after `ypr` is ignored.
pub struct YprMapper;

impl SampleMapper for YprMapper {
    fn category(&self) -> Category {
        Category::Orientation
    }

    fn map(&self, device_id: &str, _property: &str, args: &[f64]) -> Result<MeasurementBatch> {
        let mut batch = Vec::with_capacity(3);
        for (i, (name, help)) in YPR.iter().enumerate() {
            let value = arg(args, i, "ypr", 3)?;
            batch.push(MetricSample::for_device(*name, value, device_id, *help));
        }
        Ok(batch)
    }
}
