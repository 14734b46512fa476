//! Request and response bodies

pub mod auth;

pub use auth::{LoginRequest, LoginResponse, SessionResponse};
pub use sv_shared::errors::ErrorResponse;
