//! Configuration module with business-specific sub-modules
//!
//! - `auth` - signing secret, token lifetime and the static user directory
//! - `cache` - session store backend and Redis connection settings
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, UserCredential, DEFAULT_JWT_SECRET, MAX_TTL_MINUTES};
pub use cache::{CacheBackend, CacheConfig};
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Session store configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            cache: CacheConfig::memory(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Baseline configuration for an environment, before file and env overrides
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_uses_memory_store() {
        let config = AppConfig::development();
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_staging_derives_from_production() {
        let config = AppConfig::for_environment(Environment::Staging);
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }
}
