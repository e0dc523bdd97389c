use crate::error::ConfigError;
use std::{env, net::SocketAddr};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const RELAY_ROUTE: &str = "/api/backend";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Prefix every relayed `path` is appended to, verbatim.
    pub backend_base_url: String,
    pub bind_addr: SocketAddr,
    /// Where the console reaches the relay endpoint.
    pub relay_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_base_url = lookup("BACKEND_BASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("BACKEND_BASE_URL"))?;

        let bind_addr: SocketAddr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()?;

        let relay_url = lookup("RELAY_URL")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| local_relay_url(bind_addr));

        Ok(AppConfig {
            backend_base_url,
            bind_addr,
            relay_url,
        })
    }
}

/// Relay URL on loopback for the given listen address. A wildcard bind is
/// reached through 127.0.0.1.
pub fn local_relay_url(bind_addr: SocketAddr) -> String {
    format!("http://127.0.0.1:{}{}", bind_addr.port(), RELAY_ROUTE)
}
