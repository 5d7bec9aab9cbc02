//! Top-level facade crate for the T-Stick bridge.
//!
//! Re-exports core types and the bridge library so users can depend on a
//! single crate.

pub mod core {
    pub use tstick_core::*;
}

pub mod bridge {
    pub use tstick_bridge::*;
}
