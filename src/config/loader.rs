//! Configuration loading utilities
//!
//! This module provides utilities for loading configuration from files and
//! environment variables.

use super::{Config, RefreshSource};
use crate::utils::error::{CoordinatorError, Result};
use std::env;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let contents = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Policy configuration
        if let Ok(ttl) = env::var("CACHE_DEFAULT_TTL_SECS") {
            config.policy.default_ttl_secs = ttl
                .parse()
                .map_err(|e| CoordinatorError::Config(format!("Invalid default TTL: {}", e)))?;
        }
        if let Ok(ttl) = env::var("CACHE_BUFFER_TTL_SECS") {
            config.policy.buffer_ttl_secs = ttl
                .parse()
                .map_err(|e| CoordinatorError::Config(format!("Invalid buffer TTL: {}", e)))?;
        }
        if let Ok(threshold) = env::var("CACHE_REFRESH_THRESHOLD_SECS") {
            config.policy.refresh_threshold_secs = threshold.parse().map_err(|e| {
                CoordinatorError::Config(format!("Invalid refresh threshold: {}", e))
            })?;
        }
        if let Ok(source) = env::var("CACHE_REFRESH_SOURCE") {
            config.policy.refresh_source = match source.as_str() {
                "authoritative" => RefreshSource::Authoritative,
                "placeholder" => RefreshSource::Placeholder,
                other => {
                    return Err(CoordinatorError::Config(format!(
                        "Invalid refresh source: {}",
                        other
                    )))
                }
            };
        }

        // Redis configuration
        if let Ok(redis_url) = env::var("REDIS_URL") {
            config.storage.redis.url = redis_url;
        }
        if let Ok(enabled) = env::var("REDIS_ENABLED") {
            config.storage.redis.enabled = enabled
                .parse()
                .map_err(|e| CoordinatorError::Config(format!("Invalid redis flag: {}", e)))?;
        }

        // Authoritative store configuration
        if let Ok(latency) = env::var("DATABASE_SIMULATED_LATENCY_MS") {
            config.storage.database.simulated_latency_ms = latency
                .parse()
                .map_err(|e| CoordinatorError::Config(format!("Invalid latency: {}", e)))?;
        }

        config.validate()?;
        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}
