use std::net::IpAddr;

use tstick_core::error::{BridgeError, Result};

/// Environment keys, matching the deployed exporter's contract.
pub const KEY_OSC_PORT: &str = "OSC_PORT";
pub const KEY_EXPORTER_PORT: &str = "EXPORTER_PORT";
pub const KEY_BIND_ADDRESS: &str = "BIND_ADDRESS";
pub const KEY_LOG_LEVEL: &str = "EXPORTER_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// UDP port the OSC listener binds to. Required.
    pub osc_port: u16,
    /// TCP port for the Prometheus scrape endpoint.
    pub exporter_port: u16,
    /// Address both sockets bind to.
    pub bind_address: IpAddr,
    /// Default tracing level; `RUST_LOG` overrides it.
    pub log_level: String,
}

impl BridgeConfig {
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Result<Self> {
        let osc_port = lookup(KEY_OSC_PORT)
            .ok_or_else(|| BridgeError::BadConfig(format!("{KEY_OSC_PORT} must be set")))?;
        let osc_port = parse_port(KEY_OSC_PORT, &osc_port)?;

        let exporter_port = match lookup(KEY_EXPORTER_PORT) {
            Some(v) => parse_port(KEY_EXPORTER_PORT, &v)?,
            None => default_exporter_port(),
        };

        let bind_address = match lookup(KEY_BIND_ADDRESS) {
            Some(v) => v.parse::<IpAddr>().map_err(|e| {
                BridgeError::BadConfig(format!("{KEY_BIND_ADDRESS} is not an IP address: {e}"))
            })?,
            None => default_bind_address(),
        };

        let log_level = lookup(KEY_LOG_LEVEL)
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_else(default_log_level);

        Ok(Self {
            osc_port,
            exporter_port,
            bind_address,
            log_level,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.osc_port == self.exporter_port {
            return Err(BridgeError::BadConfig(
                "OSC_PORT and EXPORTER_PORT must differ".into(),
            ));
        }
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(BridgeError::BadConfig(format!(
                "{KEY_LOG_LEVEL} must be one of {LEVELS:?}, got {:?}",
                self.log_level
            )));
        }
        Ok(())
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    let port: u16 = raw
        .parse()
        .map_err(|e| BridgeError::BadConfig(format!("{key} is not a port: {e}")))?;
    if port == 0 {
        return Err(BridgeError::BadConfig(format!("{key} must be non-zero")));
    }
    Ok(port)
}

fn default_exporter_port() -> u16 {
    8000
}
fn default_bind_address() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}
fn default_log_level() -> String {
    "info".into()
}
