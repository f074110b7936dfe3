//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Idle time after which a cached entity becomes eligible for eviction
    pub cache_ttl: Duration,
    /// Period of the background sweep task
    pub sweep_interval: Duration,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Cache entry idle TTL in milliseconds (default: 20000)
    /// - `SWEEP_INTERVAL_MS` - Sweep period in milliseconds (default: the TTL)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let cache_ttl = env_millis("CACHE_TTL_MS").unwrap_or(DEFAULT_TTL);
        Self {
            cache_ttl,
            sweep_interval: env_millis("SWEEP_INTERVAL_MS").unwrap_or(cache_ttl),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL,
            sweep_interval: DEFAULT_TTL,
            server_port: 3000,
        }
    }
}

/// Reads a positive millisecond count; zero and garbage fall back to the default.
fn env_millis(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, Duration::from_millis(20_000));
        assert_eq!(config.sweep_interval, config.cache_ttl);
        assert_eq!(config.server_port, 3000);
    }

    // Single test touching the environment so parallel tests never race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("SWEEP_INTERVAL_MS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, DEFAULT_TTL);
        assert_eq!(config.sweep_interval, DEFAULT_TTL);
        assert_eq!(config.server_port, 3000);

        env::set_var("CACHE_TTL_MS", "5000");
        let config = Config::from_env();
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
        assert_eq!(config.sweep_interval, Duration::from_secs(5));

        env::set_var("SWEEP_INTERVAL_MS", "0");
        let config = Config::from_env();
        assert_eq!(config.sweep_interval, Duration::from_secs(5));

        env::remove_var("CACHE_TTL_MS");
        env::remove_var("SWEEP_INTERVAL_MS");
    }
}
