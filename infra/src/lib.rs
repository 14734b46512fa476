//! # Infrastructure Layer
//!
//! Concrete implementations of the contracts declared in `sv_core`:
//!
//! - **Cache**: Redis client with connection retry and exponential backoff
//! - **Store**: `SessionStore` backed by Redis or by in-process maps
//! - **Credentials**: `CredentialVerifier` backed by bcrypt hashes from configuration

// Re-export core types for convenience
pub use sv_core::errors::*;

/// Cache module - Redis client and operations
pub mod cache;

/// Credential directory implementations
pub mod credentials;

/// Session store implementations
pub mod store;

pub use cache::RedisClient;
pub use credentials::StaticCredentialVerifier;
pub use store::{connect_session_store, InMemorySessionStore, RedisSessionStore, SessionStoreBackend};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// A stored value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Cache(_) | InfrastructureError::Serialization(_) => {
                DomainError::store_unavailable(error)
            }
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_errors_become_store_unavailable() {
        let redis_error = redis::RedisError::from((redis::ErrorKind::IoError, "connection reset"));
        let domain: DomainError = InfrastructureError::Cache(redis_error).into();

        assert!(matches!(domain, DomainError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_corrupt_records_become_store_unavailable() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let domain: DomainError = InfrastructureError::Serialization(json_error).into();

        assert!(matches!(domain, DomainError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_config_errors_become_internal() {
        let domain: DomainError = InfrastructureError::Config("bad url".to_string()).into();

        match domain {
            DomainError::Internal { message } => assert_eq!(message, "bad url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
