//! T-Stick core: sample types, address grammar, and the shared error surface.
//!
//! This crate is transport-agnostic: it knows nothing about UDP, OSC wire
//! framing, or the metrics endpoint. It defines what a decoded address and a
//! metric sample look like so the bridge runtime and tests can share them.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `BridgeError`/`Result` so the bridge
//! process does not crash on malformed traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod sample;

/// Shared result type.
pub use error::{BridgeError, Result};
pub use sample::{MeasurementBatch, MetricSample};
