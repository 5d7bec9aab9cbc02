//! T-Stick bridge library entry.
//!
//! This crate wires the OSC transport, dispatcher, sample mappers, sample
//! buffer, and metrics endpoint into a cohesive bridge process. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod buffer;
pub mod config;
pub mod dispatch;
pub mod exporter;
pub mod mappers;
pub mod router;
pub mod shutdown;
pub mod transport;
