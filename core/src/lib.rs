//! # SessionVault Core
//!
//! Core business logic for issuing, storing and validating short-lived bearer
//! session tokens. This crate contains the domain entities, the session store
//! and credential verifier contracts, the token codec, the session manager and
//! the login gateway.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
