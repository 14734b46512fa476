//! Credential directory loaded from configuration
//!
//! Users are configured as `username -> bcrypt hash` pairs under `auth.users`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use sv_core::domain::entities::session::Principal;
use sv_core::errors::AuthError;
use sv_core::services::auth::CredentialVerifier;
use sv_shared::config::{AuthConfig, UserCredential};

use crate::InfrastructureError;

/// Password hashed for the throwaway comparison made for unknown users
const DUMMY_PASSWORD: &str = "session-vault-dummy-password";

/// Verifies passwords against bcrypt hashes held in memory
#[derive(Clone)]
pub struct StaticCredentialVerifier {
    users: Arc<HashMap<String, String>>,
    /// Hash compared against when the username is unknown, so the response
    /// time does not reveal which accounts exist
    dummy_hash: Arc<String>,
}

impl StaticCredentialVerifier {
    /// Build the directory from configured users
    ///
    /// The dummy hash uses the same cost as the first configured hash.
    pub fn new(users: impl IntoIterator<Item = UserCredential>) -> Result<Self, InfrastructureError> {
        let users: HashMap<String, String> = users
            .into_iter()
            .map(|user| (user.username, user.password_hash))
            .collect();

        let cost = users
            .values()
            .find_map(|hash| hash_cost(hash))
            .unwrap_or(bcrypt::DEFAULT_COST);
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)
            .map_err(|e| InfrastructureError::Config(format!("Failed to prepare dummy hash: {}", e)))?;

        if users.is_empty() {
            warn!("No users configured, every login will be rejected");
        } else {
            debug!(users = users.len(), "Loaded static credential directory");
        }

        Ok(Self {
            users: Arc::new(users),
            dummy_hash: Arc::new(dummy_hash),
        })
    }

    pub fn from_config(config: &AuthConfig) -> Result<Self, InfrastructureError> {
        Self::new(config.users.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Cost factor of a `$2b$NN$...` hash
pub(crate) fn hash_cost(hash: &str) -> Option<u32> {
    hash.split('$').nth(2)?.parse().ok()
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let known = self.users.get(username).cloned();
        let hash = known
            .clone()
            .unwrap_or_else(|| self.dummy_hash.as_str().to_string());
        let password = password.to_string();

        // bcrypt is deliberately slow, keep it off the async workers
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                warn!(error = %e, "Password verification task failed");
                AuthError::AuthenticationFailed
            })?;

        match (known, verified) {
            (Some(_), Ok(true)) => Ok(Principal::new(username)),
            (Some(_), Ok(false)) => {
                debug!(username, "Password mismatch");
                Err(AuthError::AuthenticationFailed)
            }
            (Some(_), Err(e)) => {
                warn!(username, error = %e, "Configured password hash is unusable");
                Err(AuthError::AuthenticationFailed)
            }
            (None, _) => {
                debug!(username, "Unknown user");
                Err(AuthError::AuthenticationFailed)
            }
        }
    }
}
