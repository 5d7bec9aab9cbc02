//! Shared error type across T-Stick bridge crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type used by core and bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The address matched no known category/property. The router drops
    /// these quietly; they are expected traffic, not faults.
    #[error("unrecognized address: {0}")]
    UnrecognizedAddress(String),
    /// A mapper needed more arguments than the datagram carried.
    #[error("argument count mismatch for {property}: expected {expected}, got {got}")]
    ArgumentCount {
        property: String,
        expected: usize,
        got: usize,
    },
    /// An OSC argument could not be coerced to f64.
    #[error("bad argument: {0}")]
    BadArgument(String),
    /// Invalid or missing configuration.
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Stable short code, used in logs and asserted by vector tests.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::UnrecognizedAddress(_) => "UNRECOGNIZED_ADDRESS",
            BridgeError::ArgumentCount { .. } => "ARGUMENT_COUNT",
            BridgeError::BadArgument(_) => "BAD_ARGUMENT",
            BridgeError::BadConfig(_) => "BAD_CONFIG",
            BridgeError::Internal(_) => "INTERNAL",
        }
    }
}
