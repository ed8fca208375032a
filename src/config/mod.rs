//! Configuration for the coordinator
//!
//! This module contains the configuration models, loading utilities, and
//! validation for the coordinator and its storage backends.

mod loader;
mod validation;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Caching policy configuration
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Storage backend configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Caching policy configuration
///
/// The TTL constants of the system live here; the strategy components take
/// them at construction and never hardcode them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// TTL for live cache entries, in seconds
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,
    /// TTL for buffered (write-behind) entries, in seconds
    #[serde(default = "default_buffer_ttl_secs")]
    pub buffer_ttl_secs: u64,
    /// Remaining-TTL low-water mark below which refresh-ahead renews, in seconds
    #[serde(default = "default_refresh_threshold_secs")]
    pub refresh_threshold_secs: u64,
    /// Where refresh-ahead recomputes values from
    #[serde(default)]
    pub refresh_source: RefreshSource,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            buffer_ttl_secs: default_buffer_ttl_secs(),
            refresh_threshold_secs: default_refresh_threshold_secs(),
            refresh_source: RefreshSource::default(),
        }
    }
}

impl PolicyConfig {
    /// TTL applied to live cache entries
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// TTL applied to buffered write entries
    pub fn buffer_ttl(&self) -> Duration {
        Duration::from_secs(self.buffer_ttl_secs)
    }

    /// Low-water mark for refresh-ahead renewal
    pub fn refresh_threshold(&self) -> Duration {
        Duration::from_secs(self.refresh_threshold_secs)
    }
}

/// Source used by refresh-ahead when recomputing a soon-to-expire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshSource {
    /// Reload the entity from the authoritative store
    #[default]
    Authoritative,
    /// Synthesize a placeholder value without touching the store
    Placeholder,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Redis configuration
    #[serde(default)]
    pub redis: RedisConfig,
    /// Authoritative store configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Enable Redis (if false, use the in-memory cache backend)
    #[serde(default = "default_redis_enabled")]
    pub enabled: bool,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            enabled: default_redis_enabled(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Authoritative store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Simulated per-operation latency in milliseconds (benchmarking aid)
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl DatabaseConfig {
    /// Simulated latency as a duration, if configured
    pub fn simulated_latency(&self) -> Option<Duration> {
        if self.simulated_latency_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.simulated_latency_ms))
        }
    }
}

fn default_ttl_secs() -> u64 {
    600
}

fn default_buffer_ttl_secs() -> u64 {
    300
}

fn default_refresh_threshold_secs() -> u64 {
    30
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_redis_enabled() -> bool {
    true
}

fn default_connection_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_config_default() {
        let config = PolicyConfig::default();
        assert_eq!(config.default_ttl_secs, 600);
        assert_eq!(config.buffer_ttl_secs, 300);
        assert_eq!(config.refresh_threshold_secs, 30);
        assert_eq!(config.refresh_source, RefreshSource::Authoritative);
    }

    #[test]
    fn test_policy_config_durations() {
        let config = PolicyConfig::default();
        assert_eq!(config.default_ttl(), Duration::from_secs(600));
        assert_eq!(config.buffer_ttl(), Duration::from_secs(300));
        assert_eq!(config.refresh_threshold(), Duration::from_secs(30));
    }

    #[test]
    fn test_redis_config_default() {
        let config = RedisConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert!(config.enabled);
        assert_eq!(config.connection_timeout, 5);
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
policy:
  default_ttl_secs: 120
  refresh_source: placeholder
storage:
  redis:
    enabled: false
  database:
    simulated_latency_ms: 50
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.policy.default_ttl_secs, 120);
        // Unset fields fall back to their defaults
        assert_eq!(config.policy.buffer_ttl_secs, 300);
        assert_eq!(config.policy.refresh_source, RefreshSource::Placeholder);
        assert!(!config.storage.redis.enabled);
        assert_eq!(
            config.storage.database.simulated_latency(),
            Some(Duration::from_millis(50))
        );
    }

    #[test]
    fn test_database_config_no_latency_by_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.simulated_latency(), None);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.policy.default_ttl_secs, config.policy.default_ttl_secs);
        assert_eq!(parsed.storage.redis.url, config.storage.redis.url);
    }
}
