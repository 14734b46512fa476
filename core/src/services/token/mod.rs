//! Token codec module for session JWTs
//!
//! Signs and verifies the claims carried by a session token. The codec is
//! stateless apart from its key material and never consults the session
//! store.

mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use codec::{mask_token, TokenCodec};
pub use config::TokenCodecConfig;
