use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use sv_core::services::auth::LoginResult;

use crate::middleware::auth::SessionContext;

/// Body of `POST /api/v1/auth/login`.
///
/// Both fields are optional at the JSON level so that an absent field is
/// reported as missing credentials rather than as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 128))]
    pub username: Option<String>,

    #[validate(length(max = 1024))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64, // seconds until the token expires
    pub username: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            token_type: "Bearer".to_string(),
            expires_in: result.expires_in,
            username: result.username,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub username: String,
    pub expire_at: DateTime<Utc>,
}

impl From<SessionContext> for SessionResponse {
    fn from(session: SessionContext) -> Self {
        Self {
            username: session.username,
            expire_at: session.expire_at,
        }
    }
}
