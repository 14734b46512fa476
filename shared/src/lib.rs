//! Shared utilities and common types for the SessionVault server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    JwtConfig, CacheConfig, CacheBackend,
    ServerConfig, AuthConfig, UserCredential, LoggingConfig
};
pub use errors::{ErrorResponse, IntoErrorResponse, ApiResult, error_codes};
