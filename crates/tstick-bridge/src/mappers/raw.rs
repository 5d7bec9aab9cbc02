use tstick_core::error::Result;
use tstick_core::protocol::address::Category;
use tstick_core::sample::{MeasurementBatch, MetricSample};

use crate::dispatch::SampleMapper;
use crate::mappers::arg;

const ACCL: [(&str, &str); 3] = [
    ("tstick_acclx", "Raw accelerometer x-axis data (m/s/s)"),
    ("tstick_accly", "Raw accelerometer y-axis data (m/s/s)"),
    ("tstick_acclz", "Raw accelerometer z-axis data (m/s/s)"),
];

const GYRO: [(&str, &str); 3] = [
    ("tstick_gyrox", "Raw gyrometer x-axis data (deg/s)"),
    ("tstick_gyroy", "Raw gyrometer y-axis data (deg/s)"),
    ("tstick_gyroz", "Raw gyrometer z-axis data (deg/s)"),
];

const MAGN: [(&str, &str); 3] = [
    ("tstick_magnx", "Raw magnetometer x-axis data (uT)"),
    ("tstick_magny", "Raw magnetometer y-axis data (uT)"),
    ("tstick_magnz", "Raw magnetometer z-axis data (uT)"),
];

/// Raw sensor telemetry: fsr, triaxial accl/gyro/magn, variable-width
/// capsense.
pub struct RawMapper;

impl SampleMapper for RawMapper {
    fn category(&self) -> Category {
        Category::Raw
    }

    fn map(&self, device_id: &str, property: &str, args: &[f64]) -> Result<MeasurementBatch> {
        match property {
            "fsr" => {
                let value = arg(args, 0, property, 1)?;
                Ok(vec![MetricSample::for_device(
                    "tstick_fsr",
                    value,
                    device_id,
                    "raw FSR value",
                )])
            }
            "accl" => triaxial(device_id, property, args, &ACCL),
            "gyro" => triaxial(device_id, property, args, &GYRO),
            "magn" => triaxial(device_id, property, args, &MAGN),
            "capsense" => Ok(args
                .iter()
                .enumerate()
                .map(|(n, &value)| {
                    MetricSample::for_device(
                        format!("tstick_capsense_{n}"),
                        value,
                        device_id,
                        format!("Raw capsense data for sensor {n}"),
                    )
                })
                .collect()),
            _ => Ok(Vec::new()),
        }
    }
}

/// Three samples in x, y, z order from args[0..3].
fn triaxial(
    device_id: &str,
    property: &str,
    args: &[f64],
    table: &[(&str, &str); 3],
) -> Result<MeasurementBatch> {
    let mut batch = Vec::with_capacity(3);
    for (i, (name, help)) in table.iter().enumerate() {
        let value = arg(args, i, property, 3)?;
        batch.push(MetricSample::for_device(*name, value, device_id, *help));
    }
    Ok(batch)
}
