//! Process-local session store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use sv_core::domain::entities::session::SessionRecord;
use sv_core::errors::DomainError;
use sv_core::repositories::SessionStore;

#[derive(Debug, Default)]
struct Indices {
    by_token: HashMap<String, SessionRecord>,
    by_username: HashMap<String, String>,
}

/// Session store holding both indices in memory.
///
/// Records never expire on their own; the session manager evicts them.
/// Suitable for development and tests, not for multi-process deployments.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Indices>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored under the token index
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_token.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_by_token(&self, token: &str) -> Result<Option<SessionRecord>, DomainError> {
        Ok(self.inner.read().await.by_token.get(token).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<SessionRecord>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_username
            .get(username)
            .and_then(|token| inner.by_token.get(token))
            .cloned())
    }

    async fn put(&self, record: SessionRecord) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner
            .by_username
            .insert(record.username.clone(), record.token.clone());
        inner.by_token.insert(record.token.clone(), record);
        debug!(records = inner.by_token.len(), "Stored session record in memory");
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().await;
        let Some(record) = inner.by_token.remove(token) else {
            return Ok(false);
        };

        if inner.by_username.get(&record.username).map(String::as_str) == Some(token) {
            inner.by_username.remove(&record.username);
        }
        Ok(true)
    }
}
