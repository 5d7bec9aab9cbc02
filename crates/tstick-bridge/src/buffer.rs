//! Shared sample buffer between OSC handlers and the scrape endpoint.
//!
//! Write-many / read-one-and-clear: handler tasks append batches, the scrape
//! handler takes the whole pending vector in one lock acquisition. The buffer
//! models "since the last scrape", not a persistent gauge: a value that
//! arrives between scrapes is exposed exactly once. Readers must not assume
//! gauge persistence for sparsely reporting devices.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use tstick_core::sample::{MeasurementBatch, MetricSample};

pub const GLOBAL_TIME_METRIC: &str = "tstick_global_time";

/// Concurrency-safe holder of pending samples between scrapes.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    pending: Mutex<Vec<MetricSample>>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append all samples in `batch`, preserving their order. Safe to call
    /// from any number of tasks; holds the lock only for the extend.
    pub fn update(&self, batch: MeasurementBatch) {
        if batch.is_empty() {
            return;
        }
        let mut pending = self.lock();
        pending.extend(batch);
    }

    /// Take every pending sample, append the liveness timestamp, and reset
    /// the buffer. The take-and-clear happens under one lock acquisition, so
    /// no concurrent `update` is ever split across two scrapes.
    pub fn collect(&self) -> Vec<MetricSample> {
        let mut out = {
            let mut pending = self.lock();
            std::mem::take(&mut *pending)
        };
        out.push(global_time_sample());
        out
    }

    /// Number of samples currently pending. Exposed for tests and logs.
    pub fn pending_len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MetricSample>> {
        // A poisoned lock only means a handler task panicked mid-extend;
        // the vector itself is still usable.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn global_time_sample() -> MetricSample {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    MetricSample::new(GLOBAL_TIME_METRIC, now, "bridge liveness timestamp")
}
