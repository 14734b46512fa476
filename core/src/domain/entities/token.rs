//! Token entities for JWT-based session tokens.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// JWT issuer
pub const JWT_ISSUER: &str = "session-vault";

/// JWT audience
pub const JWT_AUDIENCE: &str = "session-vault-api";

/// Claims structure for the session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Builds claims for `subject` issued at `issued_at` and living for `ttl`
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: chrono::Duration,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: subject.into(),
            iat,
            exp: iat + ttl.num_seconds(),
            iss: issuer.into(),
            aud: audience.into(),
        }
    }

    /// Issued-at as a timestamp
    pub fn issued_at(&self) -> Result<DateTime<Utc>, TokenError> {
        Utc.timestamp_opt(self.iat, 0)
            .single()
            .ok_or(TokenError::InvalidClaims)
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Result<DateTime<Utc>, TokenError> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .ok_or(TokenError::InvalidClaims)
    }

    /// Checks whether the claims have expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// A freshly minted token together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS string handed to the client
    pub token: String,

    /// Claims encoded into `token`
    pub claims: Claims,
}

/// Outcome of checking a stored session record.
///
/// Only the session layer sees the distinction; the access check collapses it
/// into a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Signature verifies and the record has not expired
    Valid,
    /// Signature verifies but the record's expiry has passed
    Expired,
    /// Signature, structure, algorithm or claims are wrong
    Malformed,
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenStatus::Valid)
    }
}
