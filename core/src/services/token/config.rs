//! Configuration for the token codec

use sv_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// JWT signing secret
    pub secret: String,
    /// Expected and emitted `iss` claim
    pub issuer: String,
    /// Expected and emitted `aud` claim
    pub audience: String,
}

impl TokenCodecConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            secret: sv_shared::config::DEFAULT_JWT_SECRET.to_string(),
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenCodecConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        }
    }
}
