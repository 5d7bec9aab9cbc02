//! Bridge config loader (environment with file indirection).
//!
//! Each key `K` is resolved in order: the file named by `FILE__K` (trimmed),
//! then the plain environment variable `K`, then the schema default. The
//! `FILE__` indirection exists so secrets can be mounted as files.

pub mod schema;

use std::env;
use std::fs;
use std::io;

use tstick_core::error::Result;

pub use schema::BridgeConfig;

/// Load config from the process environment.
///
/// Logging is initialized from the returned config, so non-fatal resolution
/// problems (an unreadable `FILE__` path) cannot be logged here; they are
/// returned as warnings for the caller to log once the subscriber is up.
pub fn from_env() -> Result<(BridgeConfig, Vec<String>)> {
    let mut warnings = Vec::new();
    let cfg = from_lookup(|key| {
        resolve(key, |k| env::var(k).ok(), |p: &str| fs::read_to_string(p), &mut warnings)
    })?;
    Ok((cfg, warnings))
}

/// Load config through an injected lookup. Tests use this to avoid touching
/// process-global environment state.
pub fn from_lookup(lookup: impl FnMut(&str) -> Option<String>) -> Result<BridgeConfig> {
    let cfg = BridgeConfig::from_lookup(lookup)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve one key: the contents of the file named by `FILE__<key>` (trimmed)
/// beat the plain variable. An unreadable file records a warning and falls
/// through to the plain variable, matching the deployed exporter.
pub fn resolve(
    key: &str,
    env: impl Fn(&str) -> Option<String>,
    read_file: impl Fn(&str) -> io::Result<String>,
    warnings: &mut Vec<String>,
) -> Option<String> {
    if let Some(path) = env(&format!("FILE__{key}")) {
        match read_file(&path) {
            Ok(contents) => return Some(contents.trim().to_string()),
            Err(e) => {
                warnings.push(format!("unable to read value for {key} from {path}: {e}"));
            }
        }
    }
    env(key)
}
