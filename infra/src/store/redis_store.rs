//! Redis-backed session store
//!
//! Key layout:
//! - `session:token:{token}` holds the JSON-encoded record
//! - `session:user:{username}` holds the token currently indexed for the user
//!
//! Both keys carry a native expiry equal to the record's remaining lifetime.
//! That eviction is cleanup only; validity is always decided by the session
//! manager.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use sv_core::domain::entities::session::SessionRecord;
use sv_core::errors::DomainError;
use sv_core::repositories::SessionStore;
use sv_core::services::clock::{Clock, SystemClock};
use sv_core::services::token::mask_token;

use super::{TOKEN_KEY_PREFIX, USER_KEY_PREFIX};
use crate::cache::{CacheConfig, RedisClient};
use crate::InfrastructureError;

/// Session store on top of [`RedisClient`]
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
    clock: Arc<dyn Clock>,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient) -> Self {
        Self::with_clock(client, Arc::new(SystemClock))
    }

    /// Store computing key expiries from `clock`
    pub fn with_clock(client: RedisClient, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    /// Underlying client, for health checks
    pub fn client(&self) -> &RedisClient {
        &self.client
    }

    fn token_key(&self, token: &str) -> String {
        session_key(self.client.config(), TOKEN_KEY_PREFIX, token)
    }

    fn user_key(&self, username: &str) -> String {
        session_key(self.client.config(), USER_KEY_PREFIX, username)
    }

    async fn load(&self, token: &str) -> Result<Option<SessionRecord>, InfrastructureError> {
        match self.client.get(&self.token_key(token)).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

/// Full key for `id` under `namespace`, including the configured prefix
pub(crate) fn session_key(config: &CacheConfig, namespace: &str, id: &str) -> String {
    config.make_key(&format!("{}:{}", namespace, id))
}

/// Seconds until `record` expires, never less than one so Redis accepts it
pub(crate) fn expiry_seconds(record: &SessionRecord, now: chrono::DateTime<chrono::Utc>) -> u64 {
    record.remaining_at(now).num_seconds().max(1) as u64
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get_by_token(&self, token: &str) -> Result<Option<SessionRecord>, DomainError> {
        let record = self.load(token).await?;
        debug!(token = %mask_token(token), found = record.is_some(), "Loaded session by token");
        Ok(record)
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<SessionRecord>, DomainError> {
        let Some(token) = self.client.get(&self.user_key(username)).await? else {
            return Ok(None);
        };

        let record = self.load(&token).await?;
        if record.is_none() {
            debug!(username, "Username points at a token that is gone");
        }
        Ok(record)
    }

    async fn put(&self, record: SessionRecord) -> Result<(), DomainError> {
        let ttl = expiry_seconds(&record, self.clock.now());
        let json = serde_json::to_string(&record).map_err(InfrastructureError::from)?;

        let entries = [
            (self.token_key(&record.token), json),
            (self.user_key(&record.username), record.token.clone()),
        ];
        self.client.set_all_with_expiry(&entries, ttl).await?;

        info!(
            username = %record.username,
            token = %mask_token(&record.token),
            ttl_seconds = ttl,
            "Stored session record in Redis"
        );
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let record = self.load(token).await?;
        let deleted = self.client.delete(&self.token_key(token)).await?;

        if let Some(record) = record {
            self.client
                .delete_if_equals(&self.user_key(&record.username), token)
                .await?;
        }

        debug!(token = %mask_token(token), deleted, "Deleted session record from Redis");
        Ok(deleted)
    }
}
