//! Redis key-value operations
//!
//! `CacheStore` implemented over GET, SETEX, DEL, KEYS and TTL.

use super::pool::RedisPool;
use crate::storage::CacheStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;

#[async_trait]
impl CacheStore for RedisPool {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection.clone();
        // SETEX takes whole seconds; sub-second TTLs round up to 1s
        let seconds = ttl.as_secs().max(1);
        let _: () = conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection.clone();
        let keys: Vec<String> = conn.keys(pattern).await?;
        Ok(keys)
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>> {
        let mut conn = self.connection.clone();
        // -2 = no such key, -1 = no expiry; both mean nothing to renew
        let remaining: i64 = conn.ttl(key).await?;
        if remaining >= 0 {
            Ok(Some(Duration::from_secs(remaining as u64)))
        } else {
            Ok(None)
        }
    }
}
