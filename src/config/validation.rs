//! Configuration validation
//!
//! Checks that a loaded configuration is internally consistent before any
//! component is built from it.

use super::Config;
use crate::utils::error::{CoordinatorError, Result};

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.policy.default_ttl_secs == 0 {
            return Err(CoordinatorError::Config(
                "default_ttl_secs must be greater than 0".to_string(),
            ));
        }
        if self.policy.buffer_ttl_secs == 0 {
            return Err(CoordinatorError::Config(
                "buffer_ttl_secs must be greater than 0".to_string(),
            ));
        }
        if self.policy.refresh_threshold_secs >= self.policy.default_ttl_secs {
            return Err(CoordinatorError::Config(format!(
                "refresh_threshold_secs ({}) must be below default_ttl_secs ({})",
                self.policy.refresh_threshold_secs, self.policy.default_ttl_secs
            )));
        }
        if self.storage.redis.enabled && self.storage.redis.url.is_empty() {
            return Err(CoordinatorError::Config(
                "redis.url must be set when redis is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
