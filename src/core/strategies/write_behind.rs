//! Write-behind (buffered) strategy
//!
//! Writes land in a cache-resident buffer under the `buffer:` namespace and
//! are persisted to the authoritative store only when `flush` runs. The buffer
//! is last-write-wins per id: a later buffered write for the same id replaces
//! the earlier one. Delivery to the store is at-least-once; `persist` must be
//! an idempotent upsert for retries to be safe.
//!
//! Flush holds an internal lock that `buffer_write` also takes, so a write
//! arriving during a flush can never be deleted unpersisted. The lock is per
//! buffer instance: two buffers over the same backend do not exclude each
//! other, in line with the single-process scope of this crate. The lock does
//! not remove the other loss mode: a buffered write whose TTL expires before any
//! flush runs is gone silently. That window is bounded by the buffer TTL and
//! is an accepted property of this strategy, not a bug to patch here.

use crate::config::PolicyConfig;
use crate::core::keys::KeyCodec;
use crate::core::models::User;
use crate::storage::{CacheStore, EntityStore};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Outcome of a single flush pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlushOutcome {
    /// Entries persisted and removed from the buffer
    pub flushed: usize,
    /// Keys that vanished between the scan and the read (expired or deleted)
    pub skipped: usize,
    /// Entries that failed to persist or decode; retained for the next flush
    pub failed: usize,
}

/// Buffered writer with explicit flush
pub struct WriteBehindBuffer {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn EntityStore>,
    codec: KeyCodec,
    buffer_ttl: Duration,
    // Serializes buffer_write against the scan+flush window
    flush_lock: Mutex<()>,
}

impl WriteBehindBuffer {
    /// Create a new buffer
    pub fn new(
        cache: Arc<dyn CacheStore>,
        store: Arc<dyn EntityStore>,
        codec: KeyCodec,
        policy: &PolicyConfig,
    ) -> Self {
        Self {
            cache,
            store,
            codec,
            buffer_ttl: policy.buffer_ttl(),
            flush_lock: Mutex::new(()),
        }
    }

    /// Buffer a write for later persistence
    ///
    /// No store write happens here. The entry lives under the buffer namespace
    /// with the buffer TTL; if no flush runs before it expires, the write is
    /// lost.
    pub async fn buffer_write(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        let key = self.codec.buffer_key(user.id);

        let _guard = self.flush_lock.lock().await;
        self.cache.set(&key, &raw, self.buffer_ttl).await?;
        debug!(%key, "buffered write");
        Ok(())
    }

    /// Persist all buffered entries to the authoritative store
    ///
    /// One pass over a snapshot of the buffer namespace; entries buffered
    /// after the scan wait for the next flush. Per-entry failures never abort
    /// the batch.
    pub async fn flush(&self) -> Result<FlushOutcome> {
        let _guard = self.flush_lock.lock().await;

        let keys = self.cache.list_keys(&self.codec.buffer_pattern()).await?;
        let mut outcome = FlushOutcome::default();

        for key in keys {
            match self.flush_entry(&key).await {
                Ok(true) => outcome.flushed += 1,
                Ok(false) => outcome.skipped += 1,
                Err(e) => {
                    warn!(%key, error = %e, "flush failed, entry retained for retry");
                    outcome.failed += 1;
                }
            }
        }

        if outcome.flushed > 0 || outcome.failed > 0 {
            info!(
                flushed = outcome.flushed,
                skipped = outcome.skipped,
                failed = outcome.failed,
                "write-behind flush completed"
            );
        }
        Ok(outcome)
    }

    async fn flush_entry(&self, key: &str) -> Result<bool> {
        let Some(raw) = self.cache.get(key).await? else {
            return Ok(false);
        };
        let user: User = serde_json::from_str(&raw)?;

        self.store.persist(&user).await?;
        // Delete strictly after the persist is confirmed
        self.cache.delete(key).await?;
        debug!(%key, id = user.id, "flushed buffered write");
        Ok(true)
    }
}
