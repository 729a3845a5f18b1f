use std::{env, time::Duration};

use playerhands_core::storage::{BoundedConfig, OnTimeout};
use thiserror::Error;

/// Default DynamoDB table holding player hands.
pub const DEFAULT_TABLE_NAME: &str = "playerHands";

/// Default cap on the number of Query pages read for one version.
pub const DEFAULT_MAX_QUERY_PAGES: usize = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table name (default: "playerHands")
    pub table_name: String,
    /// Wait for a single storage call in milliseconds (default: 3000)
    pub timeout_ms: u64,
    /// Maximum Query pages read per version (default: 10)
    pub max_query_pages: usize,
    /// What happens to a call after its caller timed out (default: detach)
    pub on_timeout: OnTimeout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            timeout_ms: 3_000,
            max_query_pages: DEFAULT_MAX_QUERY_PAGES,
            on_timeout: OnTimeout::Detach,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PLAYER_HAND_TABLE_NAME` - DynamoDB table name (default: "playerHands")
    /// - `HAND_STORE_TIMEOUT_MS` - Per-call timeout in milliseconds (default: 3000)
    /// - `HAND_QUERY_MAX_PAGES` - Query page cap, at least 1 (default: 10)
    /// - `HAND_STORE_ON_TIMEOUT` - `detach` or `abort` (default: detach)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timeout_ms = match lookup("HAND_STORE_TIMEOUT_MS") {
            Some(v) => parse_number("HAND_STORE_TIMEOUT_MS", &v)?,
            None => defaults.timeout_ms,
        };
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "HAND_STORE_TIMEOUT_MS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let max_query_pages = match lookup("HAND_QUERY_MAX_PAGES") {
            Some(v) => parse_number("HAND_QUERY_MAX_PAGES", &v)?,
            None => defaults.max_query_pages,
        };
        if max_query_pages == 0 {
            return Err(ConfigError::InvalidValue {
                var: "HAND_QUERY_MAX_PAGES",
                reason: "must be at least 1".to_string(),
            });
        }

        let on_timeout = match lookup("HAND_STORE_ON_TIMEOUT") {
            Some(v) => v
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "HAND_STORE_ON_TIMEOUT",
                    reason,
                })?,
            None => defaults.on_timeout,
        };

        Ok(Self {
            table_name: lookup("PLAYER_HAND_TABLE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.table_name),
            timeout_ms,
            max_query_pages,
            on_timeout,
        })
    }

    /// Get the per-call timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Timeout settings for the store.
    pub fn bounded(&self) -> BoundedConfig {
        BoundedConfig::new(self.timeout()).with_on_timeout(self.on_timeout)
    }
}

fn parse_number<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            reason: format!("'{value}': {e}"),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.table_name, "playerHands");
        assert_eq!(config.timeout_ms, 3_000);
        assert_eq!(config.max_query_pages, DEFAULT_MAX_QUERY_PAGES);
        assert_eq!(config.on_timeout, OnTimeout::Detach);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PLAYER_HAND_TABLE_NAME", "hands-staging"),
            ("HAND_STORE_TIMEOUT_MS", "500"),
            ("HAND_QUERY_MAX_PAGES", "2"),
            ("HAND_STORE_ON_TIMEOUT", "abort"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "hands-staging");
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert_eq!(config.max_query_pages, 2);
        assert_eq!(
            config.bounded(),
            BoundedConfig::new(Duration::from_millis(500)).with_on_timeout(OnTimeout::Abort)
        );
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[("HAND_STORE_TIMEOUT_MS", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                var: "HAND_STORE_TIMEOUT_MS",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let err = Config::from_lookup(lookup(&[("HAND_QUERY_MAX_PAGES", "0")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for HAND_QUERY_MAX_PAGES: must be at least 1"
        );
    }

    #[test]
    fn test_invalid_on_timeout() {
        let err = Config::from_lookup(lookup(&[("HAND_STORE_ON_TIMEOUT", "retry")])).unwrap_err();
        assert!(err.to_string().contains("expected 'detach' or 'abort'"));
    }
}
