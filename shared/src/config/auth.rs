//! Authentication and session token configuration

use serde::{Deserialize, Serialize};

/// Secret used when nothing else is configured. Never acceptable in production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Longest accepted session lifetime: one year
pub const MAX_TTL_MINUTES: i64 = 365 * 24 * 60;

/// JWT signing configuration for session tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify tokens
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Session token lifetime in minutes
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            ttl_minutes: default_ttl_minutes(),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the session token lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }

    /// Token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes.saturating_mul(60)
    }

    /// Whether `ttl_minutes` lies within `1..=MAX_TTL_MINUTES`
    pub fn has_valid_ttl(&self) -> bool {
        (1..=MAX_TTL_MINUTES).contains(&self.ttl_minutes)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// A user entry for the static credential directory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserCredential {
    /// Unique login name
    pub username: String,

    /// bcrypt hash of the user's password
    pub password_hash: String,
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Users known to the static credential directory
    #[serde(default)]
    pub users: Vec<UserCredential>,
}

impl AuthConfig {
    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get session token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.jwt.ttl_seconds()
    }
}

fn default_secret() -> String {
    String::from(DEFAULT_JWT_SECRET)
}

fn default_ttl_minutes() -> i64 {
    1
}

fn default_issuer() -> String {
    String::from("session-vault")
}

fn default_audience() -> String {
    String::from("session-vault-api")
}
