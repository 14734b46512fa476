//! Authentication service module
//!
//! The login gateway: checks the presence of credentials, delegates
//! verification to a `CredentialVerifier` and hands the resulting principal
//! to the session manager.

mod service;
mod verifier;

#[cfg(test)]
mod tests;

pub use service::{AuthService, LoginResult};
pub use verifier::CredentialVerifier;
