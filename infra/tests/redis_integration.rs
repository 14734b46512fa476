//! Integration tests for the Redis session store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p sv_infra --test redis_integration -- --ignored

use chrono::{Duration, Utc};

use sv_core::domain::entities::session::SessionRecord;
use sv_core::repositories::SessionStore;
use sv_infra::cache::{CacheConfig, RedisClient};
use sv_infra::RedisSessionStore;

async fn create_store(prefix: &str) -> RedisSessionStore {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
    .with_prefix(format!("test:{}:{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default()));

    let client = RedisClient::new(config).await.unwrap();
    RedisSessionStore::new(client)
}

fn record(token: &str, username: &str) -> SessionRecord {
    SessionRecord::new(token, username, Utc::now() + Duration::seconds(30))
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_health_check() {
    let store = create_store("health").await;

    assert!(store.client().health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_put_and_lookup_both_indices() {
    let store = create_store("put").await;
    let stored = record("token-1", "alice");

    store.put(stored.clone()).await.unwrap();

    assert_eq!(store.get_by_token("token-1").await.unwrap(), Some(stored.clone()));
    assert_eq!(store.get_by_username("alice").await.unwrap(), Some(stored));

    assert!(store.delete_by_token("token-1").await.unwrap());
    assert_eq!(store.get_by_username("alice").await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_deleting_shadowed_record_keeps_newer_pointer() {
    let store = create_store("shadow").await;

    store.put(record("old", "alice")).await.unwrap();
    store.put(record("new", "alice")).await.unwrap();
    assert!(store.delete_by_token("old").await.unwrap());

    let current = store.get_by_username("alice").await.unwrap().unwrap();
    assert_eq!(current.token, "new");

    store.delete_by_token("new").await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_keys_expire_natively() {
    let store = create_store("expiry").await;
    let short = SessionRecord::new("short", "bob", Utc::now() + Duration::seconds(1));

    store.put(short).await.unwrap();
    tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;

    assert_eq!(store.get_by_token("short").await.unwrap(), None);
    assert_eq!(store.get_by_username("bob").await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_delete_unknown_token() {
    let store = create_store("unknown").await;

    assert!(!store.delete_by_token("never-stored").await.unwrap());
}
