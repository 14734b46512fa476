//! Error types for authentication and session token handling

use thiserror::Error;

/// Authentication errors surfaced at the login boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing username or password")]
    MissingCredentials,

    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Token errors. Never surfaced to callers of the access check, which only
/// ever sees `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Unsupported token algorithm")]
    UnsupportedAlgorithm,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    GenerationFailed,
}
