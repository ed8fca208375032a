//! Error handling for the coordinator
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the coordinator
pub type Result<T> = std::result::Result<T, CoordinatorError>;

/// Main error type for the coordinator
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache backend errors (non-fatal to read paths)
    #[error("Cache error: {0}")]
    Cache(String),

    /// Authoritative store errors (fatal to the calling operation)
    #[error("Store error: {0}")]
    Store(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoordinatorError {
    /// Whether this error represents an absent entity rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoordinatorError::NotFound(_))
    }

    /// Whether this error originated in the cache backend
    pub fn is_cache_error(&self) -> bool {
        match self {
            CoordinatorError::Cache(_) => true,
            #[cfg(feature = "redis")]
            CoordinatorError::Redis(_) => true,
            _ => false,
        }
    }
}
