//! Session entities: the authenticated principal and the stored session record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the credential directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique login name
    pub username: String,
}

impl Principal {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Stored association between a token, its owner and its expiry.
///
/// Retrievable by `token` (primary key) and separately by `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Signed token string
    pub token: String,

    /// Owner of the session
    pub username: String,

    /// Instant after which the session is dead.
    ///
    /// Equal to the token's `exp` claim, so it is whole seconds: a token
    /// minted at 10:00:00.900 with a one-minute lifetime dies at 10:01:00.
    pub expire_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(
        token: impl Into<String>,
        username: impl Into<String>,
        expire_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            expire_at,
        }
    }

    /// A session is live only while `expire_at` is strictly after `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at <= now
    }

    /// Time left before expiry, or zero when already expired
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        if self.expire_at > now {
            self.expire_at - now
        } else {
            Duration::zero()
        }
    }
}
