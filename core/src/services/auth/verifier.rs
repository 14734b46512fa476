//! Credential verification contract

use async_trait::async_trait;

use crate::domain::entities::session::Principal;
use crate::errors::AuthError;

/// Checks a username/password pair against a user directory.
///
/// Implementations may fail for any reason (unknown user, wrong password,
/// directory outage); the login gateway treats every failure the same way.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError>;
}
