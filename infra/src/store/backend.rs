//! Runtime selection between the Redis and in-memory stores

use async_trait::async_trait;
use tracing::info;

use sv_core::domain::entities::session::SessionRecord;
use sv_core::errors::DomainError;
use sv_core::repositories::SessionStore;
use sv_shared::config::{CacheBackend, CacheConfig};

use super::{InMemorySessionStore, RedisSessionStore};
use crate::cache::RedisClient;
use crate::InfrastructureError;

/// The session store chosen by `cache.backend`
pub enum SessionStoreBackend {
    Redis(RedisSessionStore),
    Memory(InMemorySessionStore),
}

impl SessionStoreBackend {
    /// Whether the backing store answers. Always true for the memory store.
    pub async fn health_check(&self) -> bool {
        match self {
            SessionStoreBackend::Redis(store) => {
                matches!(store.client().health_check().await, Ok(true))
            }
            SessionStoreBackend::Memory(_) => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionStoreBackend::Redis(_) => "redis",
            SessionStoreBackend::Memory(_) => "memory",
        }
    }
}

/// Build the store selected by `config`, connecting to Redis if needed
pub async fn connect_session_store(
    config: &CacheConfig,
) -> Result<SessionStoreBackend, InfrastructureError> {
    let backend = match config.backend {
        CacheBackend::Redis => {
            let client = RedisClient::new(config.clone()).await?;
            SessionStoreBackend::Redis(RedisSessionStore::new(client))
        }
        CacheBackend::Memory => SessionStoreBackend::Memory(InMemorySessionStore::new()),
    };

    info!("Session store backend: {}", backend.name());
    Ok(backend)
}

#[async_trait]
impl SessionStore for SessionStoreBackend {
    async fn get_by_token(&self, token: &str) -> Result<Option<SessionRecord>, DomainError> {
        match self {
            SessionStoreBackend::Redis(store) => store.get_by_token(token).await,
            SessionStoreBackend::Memory(store) => store.get_by_token(token).await,
        }
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<SessionRecord>, DomainError> {
        match self {
            SessionStoreBackend::Redis(store) => store.get_by_username(username).await,
            SessionStoreBackend::Memory(store) => store.get_by_username(username).await,
        }
    }

    async fn put(&self, record: SessionRecord) -> Result<(), DomainError> {
        match self {
            SessionStoreBackend::Redis(store) => store.put(record).await,
            SessionStoreBackend::Memory(store) => store.put(record).await,
        }
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        match self {
            SessionStoreBackend::Redis(store) => store.delete_by_token(token).await,
            SessionStoreBackend::Memory(store) => store.delete_by_token(token).await,
        }
    }
}
