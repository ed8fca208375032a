//! # CacheFlow-RS
//!
//! A caching strategy coordinator sitting between application code and an
//! authoritative data store, implementing four canonical strategies over a
//! pluggable cache backend:
//!
//! - **Cache-aside**: read-through with lazy population on miss
//! - **Write-through**: synchronous dual write to store and cache
//! - **Write-behind**: buffered writes with deferred batched persistence
//! - **Refresh-ahead**: proactive TTL renewal for hot keys
//!
//! The cache backend and the authoritative store are abstract capabilities
//! (`CacheStore`, `EntityStore`) injected at construction; Redis and in-memory
//! implementations ship with the crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cacheflow_rs::{Config, Coordinator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let coordinator = Coordinator::new(config).await?;
//!
//!     let user = coordinator.reader().get(1).await?;
//!     println!("Fetched: {:?}", user);
//!
//!     coordinator.writer().update(1, "Updated Name").await?;
//!     coordinator.buffer().flush().await?;
//!     coordinator.refresher().refresh(&[1, 2]).await;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::{Config, PolicyConfig, RefreshSource};
pub use core::models::User;
pub use core::strategies::{
    CacheAsideReader, FlushOutcome, RefreshAheadScheduler, RefreshOutcome, WriteBehindBuffer,
    WriteThroughWriter,
};
pub use core::KeyCodec;
pub use storage::{CacheStore, EntityStore, MemoryDatabase, MemoryStore};
pub use utils::error::{CoordinatorError, Result};

use std::sync::Arc;
use tracing::info;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Facade wiring the four strategy components over shared capabilities
///
/// All state lives in the cache backend and the authoritative store; the
/// coordinator itself owns nothing persistent.
pub struct Coordinator {
    reader: CacheAsideReader,
    writer: WriteThroughWriter,
    buffer: WriteBehindBuffer,
    refresher: RefreshAheadScheduler,
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn EntityStore>,
}

impl Coordinator {
    /// Create a coordinator from configuration
    ///
    /// Selects the Redis backend when the `redis` feature is on and
    /// `storage.redis.enabled` is true, and the in-memory backend otherwise.
    /// The authoritative store is the in-memory database; use
    /// [`Coordinator::with_stores`] to plug in a different one.
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating coordinator");
        config.validate()?;

        let cache = storage::cache_from_config(&config).await?;
        let store: Arc<dyn EntityStore> = match config.storage.database.simulated_latency() {
            Some(latency) => Arc::new(MemoryDatabase::with_latency(latency)),
            None => Arc::new(MemoryDatabase::new()),
        };

        Ok(Self::with_stores(cache, store, &config.policy))
    }

    /// Wire the strategy components over caller-supplied capabilities
    pub fn with_stores(
        cache: Arc<dyn CacheStore>,
        store: Arc<dyn EntityStore>,
        policy: &PolicyConfig,
    ) -> Self {
        let codec = KeyCodec::default();
        Self {
            reader: CacheAsideReader::new(cache.clone(), store.clone(), codec.clone(), policy),
            writer: WriteThroughWriter::new(cache.clone(), store.clone(), codec.clone(), policy),
            buffer: WriteBehindBuffer::new(cache.clone(), store.clone(), codec.clone(), policy),
            refresher: RefreshAheadScheduler::new(cache.clone(), store.clone(), codec, policy),
            cache,
            store,
        }
    }

    /// Cache-aside reader
    pub fn reader(&self) -> &CacheAsideReader {
        &self.reader
    }

    /// Write-through writer
    pub fn writer(&self) -> &WriteThroughWriter {
        &self.writer
    }

    /// Write-behind buffer
    pub fn buffer(&self) -> &WriteBehindBuffer {
        &self.buffer
    }

    /// Refresh-ahead scheduler
    pub fn refresher(&self) -> &RefreshAheadScheduler {
        &self.refresher
    }

    /// Shared cache backend capability
    pub fn cache(&self) -> Arc<dyn CacheStore> {
        self.cache.clone()
    }

    /// Shared authoritative store capability
    pub fn store(&self) -> Arc<dyn EntityStore> {
        self.store.clone()
    }
}
