//! OSC address decoding (panic-free).
//!
//! Grammar, matching the patterns the T-Stick firmware emits:
//! - `/<deviceId>/battery/<property>`
//! - `/<deviceId>/raw/<property>`
//! - `/<deviceId>/ypr[...]`
//!
//! Parsing rules:
//! - Never slice by fixed offsets — the device token is the whole first path
//!   segment, whatever its length.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use crate::error::{BridgeError, Result};

/// Upper bound on the device token length. Anything longer is treated as
/// unrecognized traffic rather than a device id.
pub const MAX_DEVICE_ID_LEN: usize = 64;

/// Measurement category, selects which mapper applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Battery,
    Raw,
    Orientation,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Battery, Category::Raw, Category::Orientation];

    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Battery => "battery",
            Category::Raw => "raw",
            Category::Orientation => "ypr",
        }
    }
}

/// Decoded OSC address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Device token, taken verbatim from the first path segment.
    pub device_id: String,
    pub category: Category,
    /// Remaining path segment naming the field within the category.
    /// Empty for plain `/ypr` addresses.
    pub property: String,
}

/// Decode an OSC address pattern into device id, category, and property.
///
/// Unknown shapes surface as `BridgeError::UnrecognizedAddress`; callers are
/// expected to drop those messages without producing samples.
pub fn decode_address(addr: &str) -> Result<DecodedAddress> {
    let unrecognized = || BridgeError::UnrecognizedAddress(addr.to_string());

    let rest = addr.strip_prefix('/').ok_or_else(unrecognized)?;
    let segments: Vec<&str> = rest.split('/').collect();

    let device = *segments.first().ok_or_else(unrecognized)?;
    if device.is_empty() || device.len() > MAX_DEVICE_ID_LEN {
        return Err(unrecognized());
    }

    match segments.as_slice() {
        [_, "battery", property] if !property.is_empty() => Ok(DecodedAddress {
            device_id: device.to_string(),
            category: Category::Battery,
            property: (*property).to_string(),
        }),
        [_, "raw", property] if !property.is_empty() => Ok(DecodedAddress {
            device_id: device.to_string(),
            category: Category::Raw,
            property: (*property).to_string(),
        }),
        // The firmware maps `/<id>/ypr*`: a single trailing segment that
        // begins with "ypr". The suffix (if any) is kept as the property.
        [_, tail] if tail.starts_with("ypr") => Ok(DecodedAddress {
            device_id: device.to_string(),
            category: Category::Orientation,
            property: tail["ypr".len()..].to_string(),
        }),
        _ => Err(unrecognized()),
    }
}
