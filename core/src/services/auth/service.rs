//! Login gateway implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::SessionStore;
use crate::services::session::SessionManager;

use super::verifier::CredentialVerifier;

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    /// Live session token for the user
    pub token: String,
    /// Username the token was issued to
    pub username: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// Authentication service turning credentials into session tokens
pub struct AuthService<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    /// Session manager issuing and reusing tokens
    session_manager: Arc<SessionManager<S>>,
    /// External user directory
    verifier: Arc<V>,
}

impl<S, V> AuthService<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `session_manager` - Manager issuing session tokens
    /// * `verifier` - Credential directory used to authenticate users
    pub fn new(session_manager: Arc<SessionManager<S>>, verifier: Arc<V>) -> Self {
        Self {
            session_manager,
            verifier,
        }
    }

    /// Session manager behind this service
    pub fn session_manager(&self) -> &Arc<SessionManager<S>> {
        &self.session_manager
    }

    /// Logs a user in and returns their session token
    ///
    /// This method:
    /// 1. Rejects absent or empty credentials without consulting the verifier
    /// 2. Authenticates the pair; any verifier failure becomes `AuthenticationFailed`
    /// 3. Issues (or reuses) the user's session token
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResult)` - Token, owner and remaining lifetime
    /// * `Err(DomainError::Auth(MissingCredentials))` - A field was missing
    /// * `Err(DomainError::Auth(AuthenticationFailed))` - Bad username or password
    /// * `Err(DomainError::StoreUnavailable)` - Session store failure
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> DomainResult<LoginResult> {
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => (u, p),
            _ => return Err(DomainError::Auth(AuthError::MissingCredentials)),
        };

        let principal = self
            .verifier
            .authenticate(username, password)
            .await
            .map_err(|error| {
                warn!(username, %error, "Login rejected");
                DomainError::Auth(AuthError::AuthenticationFailed)
            })?;

        let token = self.session_manager.issue(&principal).await?;

        let codec = self.session_manager.codec();
        let expires_in = (codec.expires_at(&token)? - codec.now())
            .num_seconds()
            .max(0);

        info!(username = %principal.username, expires_in, "Login succeeded");

        Ok(LoginResult {
            token,
            username: principal.username,
            expires_in,
        })
    }
}
