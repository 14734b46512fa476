//! Configuration for the session manager

use chrono::Duration;
use sv_shared::config::{JwtConfig, MAX_TTL_MINUTES};

/// Configuration for the session manager
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Lifetime of every session, fixed for the whole process
    pub ttl: Duration,
}

impl SessionConfig {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::minutes(1),
        }
    }
}

impl From<&JwtConfig> for SessionConfig {
    /// Out-of-range lifetimes are clamped into `1..=MAX_TTL_MINUTES`
    fn from(jwt: &JwtConfig) -> Self {
        let minutes = jwt.ttl_minutes.clamp(1, MAX_TTL_MINUTES);
        Self {
            ttl: Duration::try_minutes(minutes).unwrap_or_else(|| Duration::minutes(1)),
        }
    }
}
