//! Session store trait defining the interface for session record persistence.

use async_trait::async_trait;

use crate::domain::entities::session::SessionRecord;
use crate::errors::DomainError;

/// Key-value store holding session records under two access paths.
///
/// The primary key is the token string; the secondary key is the username.
/// The store enforces neither username uniqueness nor expiry: it is a plain
/// persistence layer and the session manager keeps "at most one live record
/// per username" by explicit delete-then-put sequencing. Native TTL eviction,
/// where the backend has it, is best-effort cleanup only.
///
/// Backend failures are reported as `DomainError::StoreUnavailable`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find a session record by its token value
    ///
    /// # Returns
    /// * `Ok(Some(SessionRecord))` - Record found
    /// * `Ok(None)` - No record stored under this token
    /// * `Err(DomainError)` - Store error occurred
    async fn get_by_token(&self, token: &str) -> Result<Option<SessionRecord>, DomainError>;

    /// Find the session record currently indexed under a username
    ///
    /// # Returns
    /// * `Ok(Some(SessionRecord))` - Record found
    /// * `Ok(None)` - No record indexed for this username
    /// * `Err(DomainError)` - Store error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use sv_core::repositories::SessionStore;
    /// # async fn example(store: &impl SessionStore) -> Result<(), Box<dyn std::error::Error>> {
    /// match store.get_by_username("alice").await? {
    ///     Some(record) => println!("alice holds a session until {}", record.expire_at),
    ///     None => println!("alice has no session"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn get_by_username(&self, username: &str) -> Result<Option<SessionRecord>, DomainError>;

    /// Persist a record under both its token and its username.
    ///
    /// A record already indexed under the same username is shadowed on the
    /// username path but not deleted from the token path.
    async fn put(&self, record: SessionRecord) -> Result<(), DomainError>;

    /// Delete the record stored under `token`
    ///
    /// # Returns
    /// * `Ok(true)` - Record was deleted
    /// * `Ok(false)` - Record not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError>;
}
