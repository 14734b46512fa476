//! Session manager implementation

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::domain::entities::session::{Principal, SessionRecord};
use crate::domain::entities::token::TokenStatus;
use crate::errors::DomainResult;
use crate::repositories::SessionStore;
use crate::services::token::{mask_token, TokenCodec};

use super::config::SessionConfig;

/// Issues and validates session tokens against a session store
pub struct SessionManager<S: SessionStore> {
    store: Arc<S>,
    codec: TokenCodec,
    config: SessionConfig,
}

impl<S: SessionStore> SessionManager<S> {
    /// Creates a new session manager
    ///
    /// # Arguments
    ///
    /// * `store` - Backing store for session records
    /// * `codec` - Token codec holding the signing secret and clock
    /// * `config` - Session lifetime configuration
    pub fn new(store: Arc<S>, codec: TokenCodec, config: SessionConfig) -> Self {
        Self {
            store,
            codec,
            config,
        }
    }

    /// Fixed lifetime of every session
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// The token codec used by this manager
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Returns a token for `principal`, reusing the live session if there is one.
    ///
    /// 1. Looks up the record indexed under the principal's username.
    /// 2. A valid record is returned unchanged, so repeated logins do not churn
    ///    tokens or cut off other clients holding the same session.
    /// 3. An invalid record is evicted.
    /// 4. Otherwise a fresh token is minted, stored and returned.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The live session token
    /// * `Err(DomainError)` - Token generation failed or the store is unavailable
    pub async fn issue(&self, principal: &Principal) -> DomainResult<String> {
        if let Some(existing) = self.fetch_record(&principal.username).await? {
            if self.evict_if_invalid(&existing).await?.is_valid() {
                info!(
                    username = %principal.username,
                    token = %mask_token(&existing.token),
                    "Reusing live session"
                );
                return Ok(existing.token);
            }
        }

        let record = self.mint(&principal.username)?;
        let token = record.token.clone();
        self.store.put(record).await?;

        info!(
            username = %principal.username,
            token = %mask_token(&token),
            "Issued new session"
        );
        Ok(token)
    }

    /// Looks up the record indexed under `username`. Pure query.
    pub async fn fetch_record(&self, username: &str) -> DomainResult<Option<SessionRecord>> {
        let record = self.store.get_by_username(username).await?;
        debug!(username, found = record.is_some(), "Fetched session record");
        Ok(record)
    }

    /// Classifies a record without touching the store.
    ///
    /// `Malformed` when the token fails to decode, `Expired` when the record's
    /// expiry is not strictly after now, `Valid` otherwise.
    pub fn check_record(&self, record: &SessionRecord) -> TokenStatus {
        if let Err(error) = self.codec.parse(&record.token) {
            debug!(
                token = %mask_token(&record.token),
                %error,
                "Stored token failed to decode"
            );
            return TokenStatus::Malformed;
        }

        if record.is_expired_at(self.codec.now()) {
            TokenStatus::Expired
        } else {
            TokenStatus::Valid
        }
    }

    /// True iff the token decodes and the record has not expired
    pub fn is_record_valid(&self, record: &SessionRecord) -> bool {
        self.check_record(record).is_valid()
    }

    /// Deletes `record` from the store unless it is valid.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenStatus)` - The status the record was found in
    /// * `Err(DomainError)` - The delete failed
    pub async fn evict_if_invalid(&self, record: &SessionRecord) -> DomainResult<TokenStatus> {
        let status = self.check_record(record);
        if !status.is_valid() {
            let deleted = self.store.delete_by_token(&record.token).await?;
            info!(
                username = %record.username,
                token = %mask_token(&record.token),
                ?status,
                deleted,
                "Evicted invalid session"
            );
        }
        Ok(status)
    }

    /// Answers whether `token` currently grants access.
    ///
    /// Unknown, deleted, expired and undecodable tokens all yield `false`; the
    /// caller never learns which. Only store failures are errors.
    pub async fn validate_for_access(&self, token: &str) -> DomainResult<bool> {
        Ok(self.session_for_access(token).await?.is_some())
    }

    /// Same check as [`validate_for_access`](Self::validate_for_access), but
    /// hands back the live record.
    ///
    /// A record found expired or undecodable is deleted on the way out. A failed
    /// delete is logged and does not change the answer, since the next lookup
    /// rejects the record again.
    pub async fn session_for_access(&self, token: &str) -> DomainResult<Option<SessionRecord>> {
        let Some(record) = self.store.get_by_token(token).await? else {
            debug!(token = %mask_token(token), "Unknown session token");
            return Ok(None);
        };

        match self.check_record(&record) {
            TokenStatus::Valid => Ok(Some(record)),
            status => {
                if let Err(error) = self.store.delete_by_token(&record.token).await {
                    warn!(
                        token = %mask_token(&record.token),
                        ?status,
                        %error,
                        "Failed to evict stale session"
                    );
                } else {
                    debug!(token = %mask_token(&record.token), ?status, "Evicted stale session");
                }
                Ok(None)
            }
        }
    }

    /// Signs a new token for `username` and builds its record
    fn mint(&self, username: &str) -> DomainResult<SessionRecord> {
        let issued = self.codec.issue(username, self.config.ttl)?;
        let expire_at = issued.claims.expires_at()?;
        Ok(SessionRecord::new(issued.token, username, expire_at))
    }
}

impl<S: SessionStore> std::fmt::Debug for SessionManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
