use std::sync::Arc;

use dashmap::DashMap;

use tstick_core::error::{BridgeError, Result};
use tstick_core::protocol::address::{decode_address, Category};
use tstick_core::sample::MeasurementBatch;

use crate::buffer::SampleBuffer;

/// One mapper per measurement category. Mappers are pure: decoded address
/// fields plus normalized f64 arguments in, samples out. Unknown properties
/// within a known category legitimately map to an empty batch.
pub trait SampleMapper: Send + Sync {
    fn category(&self) -> Category;
    fn map(&self, device_id: &str, property: &str, args: &[f64]) -> Result<MeasurementBatch>;
}

/// Registry and router for sample mappers.
#[derive(Default)]
pub struct Dispatcher {
    mappers: DashMap<Category, Arc<dyn SampleMapper>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            mappers: DashMap::new(),
        }
    }

    pub fn register(&self, mapper: Arc<dyn SampleMapper>) {
        self.mappers.insert(mapper.category(), mapper);
    }

    pub fn registered_categories(&self) -> Vec<Category> {
        self.mappers.iter().map(|e| *e.key()).collect()
    }

    /// Decode the address and run the matching mapper. Errors are returned to
    /// the caller; use [`Dispatcher::route`] on the datagram path, where the
    /// drop-don't-crash policy applies.
    pub fn dispatch(&self, address: &str, args: &[f64]) -> Result<MeasurementBatch> {
        let decoded = decode_address(address)?;
        let mapper = self
            .mappers
            .get(&decoded.category)
            .ok_or_else(|| {
                BridgeError::Internal(format!(
                    "no mapper registered for category: {}",
                    decoded.category.as_str()
                ))
            })?
            .value()
            .clone();
        mapper.map(&decoded.device_id, &decoded.property, args)
    }

    /// Datagram-path entry: dispatch and forward the batch to the buffer.
    /// Unrecognized addresses are dropped at debug level (expected traffic);
    /// every other failure is a warning. Nothing here ever propagates an
    /// error back into the listening loop.
    pub fn route(&self, buffer: &SampleBuffer, address: &str, args: &[f64]) {
        match self.dispatch(address, args) {
            Ok(batch) => buffer.update(batch),
            Err(BridgeError::UnrecognizedAddress(addr)) => {
                tracing::debug!(address = %addr, "dropping unrecognized address");
            }
            Err(e) => {
                tracing::warn!(address, error = %e, code = e.code(), "dropping message");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::{BatteryMapper, RawMapper, YprMapper};

    fn dispatcher() -> Dispatcher {
        let d = Dispatcher::new();
        d.register(Arc::new(BatteryMapper));
        d.register(Arc::new(RawMapper));
        d.register(Arc::new(YprMapper));
        d
    }

    #[test]
    fn battery_voltage_end_to_end() {
        let batch = dispatcher()
            .dispatch("/TStick_0001abc/battery/voltage", &[3.7])
            .unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].name, "tstick_battery_voltage");
        assert_eq!(batch[0].value, 3.7);
        assert_eq!(
            batch[0].labels,
            vec![("device_id".to_string(), "TStick_0001abc".to_string())]
        );
    }

    #[test]
    fn capsense_batch_length_tracks_argument_count() {
        let batch = dispatcher()
            .dispatch("/TStick_0001abc/raw/capsense", &[1.0, 0.0, 1.0, 1.0])
            .unwrap();
        let names: Vec<_> = batch.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "tstick_capsense_0",
                "tstick_capsense_1",
                "tstick_capsense_2",
                "tstick_capsense_3"
            ]
        );
        let values: Vec<_> = batch.iter().map(|s| s.value).collect();
        assert_eq!(values, [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn unknown_address_leaves_buffer_untouched() {
        let d = dispatcher();
        let buf = SampleBuffer::new();
        d.route(&buf, "/TStick_0001abc/unknown/thing", &[1.0]);
        assert_eq!(buf.pending_len(), 0);
    }

    #[test]
    fn argument_shortfall_is_dropped_not_propagated() {
        let d = dispatcher();
        let err = d.dispatch("/TStick_193/ypr", &[0.5]).unwrap_err();
        assert_eq!(err.code(), "ARGUMENT_COUNT");

        // The routing wrapper swallows the same failure.
        let buf = SampleBuffer::new();
        d.route(&buf, "/TStick_193/ypr", &[0.5]);
        assert_eq!(buf.pending_len(), 0);
    }

    #[test]
    fn routed_batches_accumulate() {
        let d = dispatcher();
        let buf = SampleBuffer::new();
        d.route(&buf, "/TStick_193/battery/voltage", &[3.9]);
        d.route(&buf, "/TStick_193/ypr", &[0.1, 0.2, 0.3]);
        assert_eq!(buf.pending_len(), 4);
    }
}
