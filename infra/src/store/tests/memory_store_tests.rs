//! Unit tests for the in-memory session store

use chrono::{Duration, TimeZone, Utc};

use sv_core::domain::entities::session::SessionRecord;
use sv_core::repositories::SessionStore;

use crate::store::InMemorySessionStore;

fn record(token: &str, username: &str) -> SessionRecord {
    let expire_at = Utc.timestamp_opt(1_700_000_060, 0).unwrap();
    SessionRecord::new(token, username, expire_at)
}

#[tokio::test]
async fn test_put_indexes_both_paths() {
    let store = InMemorySessionStore::new();

    store.put(record("t1", "alice")).await.unwrap();

    assert_eq!(store.get_by_token("t1").await.unwrap(), Some(record("t1", "alice")));
    assert_eq!(store.get_by_username("alice").await.unwrap(), Some(record("t1", "alice")));
    assert_eq!(store.get_by_username("bob").await.unwrap(), None);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_delete_removes_both_paths() {
    let store = InMemorySessionStore::new();
    store.put(record("t1", "alice")).await.unwrap();

    assert!(store.delete_by_token("t1").await.unwrap());

    assert_eq!(store.get_by_token("t1").await.unwrap(), None);
    assert_eq!(store.get_by_username("alice").await.unwrap(), None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_delete_unknown_token() {
    let store = InMemorySessionStore::new();

    assert!(!store.delete_by_token("missing").await.unwrap());
}

#[tokio::test]
async fn test_deleting_shadowed_record_keeps_newer_pointer() {
    let store = InMemorySessionStore::new();
    store.put(record("old", "alice")).await.unwrap();
    store.put(record("new", "alice")).await.unwrap();

    // The username path follows the latest put, the old record is still reachable by token
    assert_eq!(store.get_by_username("alice").await.unwrap().unwrap().token, "new");
    assert!(store.get_by_token("old").await.unwrap().is_some());

    assert!(store.delete_by_token("old").await.unwrap());

    assert_eq!(store.get_by_username("alice").await.unwrap().unwrap().token, "new");
}

#[tokio::test]
async fn test_store_does_not_judge_expiry() {
    let store = InMemorySessionStore::new();
    let long_gone = SessionRecord::new("t1", "alice", Utc::now() - Duration::days(1));

    store.put(long_gone.clone()).await.unwrap();

    assert_eq!(store.get_by_token("t1").await.unwrap(), Some(long_gone));
}
