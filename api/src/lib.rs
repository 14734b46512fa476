//! # SessionVault API
//!
//! HTTP gateway for the session token lifecycle: a login endpoint that
//! issues (or reuses) bearer tokens, and a middleware that guards routes with
//! the session manager's access check.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
