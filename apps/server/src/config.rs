//! Environment-backed server configuration, read once at startup.

use std::time::Duration;

use sokodash_core::dashboard::DASHBOARD_REFRESH_INTERVAL_MS;
use sokodash_core::{Error, Result};

pub const DEFAULT_DATABASE_URL: &str = "sokodash.db";
pub const DEFAULT_SELLER_ID: i64 = 1;
pub const DEFAULT_PORT: u16 = 8051;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    /// The one seller this instance serves, fixed for the process lifetime.
    pub seller_id: i64,
    pub port: u16,
    pub refresh_interval: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = env_value(&lookup, "SOKODASH_DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let seller_id = parse_env(&lookup, "SOKODASH_SELLER_ID", DEFAULT_SELLER_ID)?;
        let port = parse_env(&lookup, "SOKODASH_PORT", DEFAULT_PORT)?;
        let interval_ms = parse_env(
            &lookup,
            "SOKODASH_REFRESH_INTERVAL_MS",
            DASHBOARD_REFRESH_INTERVAL_MS,
        )?;
        if interval_ms == 0 {
            return Err(Error::configuration(
                "SOKODASH_REFRESH_INTERVAL_MS must be greater than zero",
            ));
        }

        Ok(Self {
            database_url,
            seller_id,
            port,
            refresh_interval: Duration::from_millis(interval_ms),
        })
    }
}

fn env_value(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match env_value(lookup, key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::configuration(format!("invalid value for {key}: {raw:?}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "sokodash.db");
        assert_eq!(config.seller_id, 1);
        assert_eq!(config.port, 8051);
        assert_eq!(config.refresh_interval, Duration::from_millis(5000));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("SOKODASH_DATABASE_URL", "/data/store.db"),
            ("SOKODASH_SELLER_ID", "12"),
            ("SOKODASH_PORT", "9000"),
            ("SOKODASH_REFRESH_INTERVAL_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "/data/store.db");
        assert_eq!(config.seller_id, 12);
        assert_eq!(config.port, 9000);
        assert_eq!(config.refresh_interval, Duration::from_millis(250));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("SOKODASH_SELLER_ID", "  ")]).unwrap();
        assert_eq!(config.seller_id, 1);
    }

    #[test]
    fn unparseable_values_are_startup_errors() {
        assert!(config_from(&[("SOKODASH_PORT", "eighty")]).is_err());
        assert!(config_from(&[("SOKODASH_REFRESH_INTERVAL_MS", "0")]).is_err());
    }
}
