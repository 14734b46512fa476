//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use sv_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// The backing session store could not be reached or answered garbage
    #[error("Session store unavailable: {message}")]
    StoreUnavailable { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for building a store failure from any displayable cause
    pub fn store_unavailable(cause: impl std::fmt::Display) -> Self {
        DomainError::StoreUnavailable {
            message: cause.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl IntoErrorResponse for DomainError {
    /// Client-facing body. Store and internal failures never leak their cause,
    /// and token failures all read as the same unauthorized answer.
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Auth(AuthError::MissingCredentials) => {
                ErrorResponse::new(error_codes::MISSING_CREDENTIALS, self.to_string())
            }
            DomainError::Auth(AuthError::AuthenticationFailed) => ErrorResponse::new(
                error_codes::AUTHENTICATION_FAILED,
                "Invalid username or password",
            ),
            DomainError::Token(_) => ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized"),
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::StoreUnavailable { .. } => ErrorResponse::new(
                error_codes::STORE_UNAVAILABLE,
                "Session store is temporarily unavailable",
            ),
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
            }
        }
    }
}
