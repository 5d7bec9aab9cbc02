//! Shared application state for the T-Stick bridge.
//!
//! Owns the config, the sample buffer, and the dispatcher with its built-in
//! mappers. The buffer is a constructed component, not process-global state,
//! so tests can build an `AppState` (or a bare buffer) without cross-test
//! leakage.

use std::sync::Arc;

use tstick_core::error::{BridgeError, Result};
use tstick_core::protocol::address::Category;

use crate::buffer::SampleBuffer;
use crate::config::BridgeConfig;
use crate::dispatch::Dispatcher;
use crate::mappers::{BatteryMapper, RawMapper, YprMapper};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: BridgeConfig,
    buffer: SampleBuffer,
    dispatcher: Dispatcher,
}

impl AppState {
    /// Build application state and register the built-in mappers.
    pub fn new(cfg: BridgeConfig) -> Result<Self> {
        let dispatcher = Dispatcher::new();
        dispatcher.register(Arc::new(BatteryMapper));
        dispatcher.register(Arc::new(RawMapper));
        dispatcher.register(Arc::new(YprMapper));

        // Every category the decoder can produce must have a mapper, or the
        // router would fail at runtime on valid traffic.
        let registered = dispatcher.registered_categories();
        for category in Category::ALL {
            if !registered.contains(&category) {
                return Err(BridgeError::Internal(format!(
                    "no mapper registered for category: {}",
                    category.as_str()
                )));
            }
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                buffer: SampleBuffer::new(),
                dispatcher,
            }),
        })
    }

    pub fn cfg(&self) -> &BridgeConfig {
        &self.inner.cfg
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.inner.buffer
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }
}
