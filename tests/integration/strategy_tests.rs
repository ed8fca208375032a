//! End-to-end strategy scenarios over in-memory backends

use crate::common::{memory_rig, memory_rig_with_policy, seed_users};
use cacheflow_rs::{
    CacheStore, Coordinator, EntityStore, MemoryDatabase, MemoryStore, PolicyConfig,
    RefreshSource, Result, User,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_cache_aside_scenario_john_doe() -> Result<()> {
    // id=1, name="John Doe", default TTL 600s: after one get, the cache holds
    // key "user:1" with that payload and a TTL close to 600s
    let rig = memory_rig();
    seed_users(&rig);

    let user = rig.coordinator.reader().get(1).await?;
    assert_eq!(user, User::new(1, "John Doe"));

    let raw = rig.cache.get("user:1").await?.expect("populated on miss");
    let cached: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(cached, user);

    let remaining = rig.cache.ttl("user:1").await?.unwrap();
    assert!(remaining > Duration::from_secs(595));
    assert!(remaining <= Duration::from_secs(600));
    Ok(())
}

#[tokio::test]
async fn test_miss_then_hit_returns_same_entity() -> Result<()> {
    let rig = memory_rig();
    seed_users(&rig);

    let first = rig.coordinator.reader().get(2).await?;
    let second = rig.coordinator.reader().get(2).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_write_through_read_after_write_consistency() -> Result<()> {
    let rig = memory_rig();
    seed_users(&rig);

    rig.coordinator.writer().update(1, "Updated Name").await?;
    let user = rig.coordinator.reader().get(1).await?;
    assert_eq!(user.name, "Updated Name");
    Ok(())
}

#[tokio::test]
async fn test_write_behind_flush_scenario() -> Result<()> {
    let rig = memory_rig();

    rig.coordinator
        .buffer()
        .buffer_write(&User::new(2, "Buffered User"))
        .await?;
    let outcome = rig.coordinator.buffer().flush().await?;
    assert_eq!(outcome.flushed, 1);

    assert_eq!(rig.db.load_by_id(2).await?.unwrap().name, "Buffered User");
    assert_eq!(rig.cache.get("buffer:user:2").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_write_behind_last_write_wins_scenario() -> Result<()> {
    // Two buffered writes for id=2 with different names: after flush the
    // authoritative store holds only the later name
    let rig = memory_rig();

    rig.coordinator
        .buffer()
        .buffer_write(&User::new(2, "Early"))
        .await?;
    rig.coordinator
        .buffer()
        .buffer_write(&User::new(2, "Late"))
        .await?;
    rig.coordinator.buffer().flush().await?;

    assert_eq!(rig.db.load_by_id(2).await?.unwrap().name, "Late");
    assert_eq!(rig.db.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_flush_is_noop() -> Result<()> {
    let rig = memory_rig();
    let outcome = rig.coordinator.buffer().flush().await?;
    assert_eq!(outcome.flushed, 0);
    assert_eq!(outcome.failed, 0);
    Ok(())
}

#[tokio::test]
async fn test_refresh_threshold_behavior() -> Result<()> {
    let rig = memory_rig();
    seed_users(&rig);

    // Fresh entry: left alone
    let fresh = serde_json::to_string(&User::new(1, "John Doe"))?;
    rig.cache.set("user:1", &fresh, Duration::from_secs(600)).await?;

    // Nearly-expired entry: renewed to the full default TTL
    let stale = serde_json::to_string(&User::new(2, "Jane Roe"))?;
    rig.cache.set("user:2", &stale, Duration::from_secs(5)).await?;

    let outcome = rig.coordinator.refresher().refresh(&[1, 2]).await;
    assert_eq!(outcome.untouched, 1);
    assert_eq!(outcome.refreshed, 1);

    assert!(rig.cache.ttl("user:2").await?.unwrap() > Duration::from_secs(500));
    Ok(())
}

#[tokio::test]
async fn test_refresh_never_populates_absent_keys() -> Result<()> {
    let rig = memory_rig();
    seed_users(&rig);

    let outcome = rig.coordinator.refresher().refresh(&[1, 2, 3]).await;
    assert_eq!(outcome.skipped, 3);
    assert!(rig.cache.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_refresh_placeholder_policy() -> Result<()> {
    let mut policy = PolicyConfig::default();
    policy.refresh_source = RefreshSource::Placeholder;
    let rig = memory_rig_with_policy(policy);

    let raw = serde_json::to_string(&User::new(7, "Original"))?;
    rig.cache.set("user:7", &raw, Duration::from_secs(3)).await?;

    let outcome = rig.coordinator.refresher().refresh(&[7]).await;
    assert_eq!(outcome.refreshed, 1);

    let renewed: User = serde_json::from_str(&rig.cache.get("user:7").await?.unwrap()).unwrap();
    assert_eq!(renewed.id, 7);
    assert_eq!(renewed.name, "Hot User");
    Ok(())
}

#[tokio::test]
async fn test_strategies_share_the_live_namespace() -> Result<()> {
    // A write-through update is visible to a subsequent cache-aside read as a
    // hit, while buffered writes stay invisible until flushed
    let rig = memory_rig();
    seed_users(&rig);

    rig.coordinator.writer().update(3, "Through").await?;
    rig.coordinator
        .buffer()
        .buffer_write(&User::new(3, "Behind"))
        .await?;

    let user = rig.coordinator.reader().get(3).await?;
    assert_eq!(user.name, "Through");

    rig.coordinator.buffer().flush().await?;
    assert_eq!(rig.db.load_by_id(3).await?.unwrap().name, "Behind");
    Ok(())
}

#[tokio::test]
async fn test_many_buffered_writes_flush_in_one_pass() -> Result<()> {
    // Every write buffered before the flush lands in that single pass
    let rig = memory_rig();
    let buffer = rig.coordinator.buffer();

    for id in 0..20 {
        buffer.buffer_write(&User::new(id, format!("User {}", id))).await?;
    }
    let outcome = buffer.flush().await?;
    assert_eq!(outcome.flushed, 20);
    assert_eq!(rig.db.len(), 20);
    assert!(rig.cache.list_keys("buffer:user:*").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_write_during_flush_is_never_lost() -> Result<()> {
    // A write issued while a flush is in-flight waits for the buffer's lock;
    // it must end up persisted by a later flush or still sit under its buffer
    // key, never deleted unpersisted. Store latency keeps the flush window
    // open long enough for the second write to arrive mid-pass.
    let cache = Arc::new(MemoryStore::new());
    let db = Arc::new(MemoryDatabase::with_latency(Duration::from_millis(50)));
    let coordinator = Arc::new(Coordinator::with_stores(
        cache.clone(),
        db.clone(),
        &PolicyConfig::default(),
    ));

    coordinator
        .buffer()
        .buffer_write(&User::new(1, "Before Flush"))
        .await?;

    let flusher = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.buffer().flush().await })
    };
    // Give the flush time to take the lock and enter the slow persist
    tokio::time::sleep(Duration::from_millis(10)).await;
    coordinator
        .buffer()
        .buffer_write(&User::new(2, "During Flush"))
        .await?;

    let outcome = flusher.await.unwrap()?;
    assert_eq!(outcome.flushed, 1);

    // The mid-flush write is accounted for: persisted already, or retained
    let persisted = db.load_by_id(2).await?.is_some();
    let buffered = cache.get("buffer:user:2").await?.is_some();
    assert!(persisted || buffered);

    coordinator.buffer().flush().await?;
    assert_eq!(db.load_by_id(2).await?.unwrap().name, "During Flush");
    assert!(cache.list_keys("buffer:user:*").await?.is_empty());
    Ok(())
}
