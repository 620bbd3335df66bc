// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LEDGER_URL: &str = "https://mainnet.accumulatenetwork.io/v3";
pub const SERVICE_NAME: &str = "crystal-api";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// JSON-RPC endpoint of the upstream ledger node.
    pub ledger_url: String,
    /// `None` leaves upstream calls unbounded.
    pub ledger_timeout: Option<Duration>,
    pub service_name: String,
    pub service_version: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            ledger_url: DEFAULT_LEDGER_URL.to_string(),
            ledger_timeout: None,
            service_name: SERVICE_NAME.to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl NodeConfig {
    /// Reads `PORT`, `LEDGER_RPC_URL` and `LEDGER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: port.clone(),
            })?;
            cfg.bind_addr.set_port(port);
        }

        if let Some(url) = lookup("LEDGER_RPC_URL").filter(|v| !v.is_empty()) {
            cfg.ledger_url = url;
        }

        if let Some(secs) = lookup("LEDGER_TIMEOUT_SECS").filter(|v| !v.is_empty()) {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                var: "LEDGER_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            cfg.ledger_timeout = Some(Duration::from_secs(secs));
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = NodeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert!(cfg.bind_addr.ip().is_unspecified());
        assert_eq!(cfg.ledger_url, DEFAULT_LEDGER_URL);
        assert!(cfg.ledger_timeout.is_none());
        assert_eq!(cfg.service_name, "crystal-api");
    }

    #[test]
    fn test_env_overrides() {
        let cfg = NodeConfig::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("LEDGER_RPC_URL", "http://127.0.0.1:26660/v3"),
            ("LEDGER_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 9090);
        assert_eq!(cfg.ledger_url, "http://127.0.0.1:26660/v3");
        assert_eq!(cfg.ledger_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_empty_port_uses_default() {
        let cfg = NodeConfig::from_lookup(lookup(&[("PORT", "")])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn test_bad_port_rejected() {
        let err = NodeConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
