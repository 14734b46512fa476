//! Session manager module
//!
//! Decides whether a login reuses the caller's live session or replaces a
//! dead one, keeps at most one live session per username, and answers
//! access checks for presented tokens.

mod config;
mod manager;

#[cfg(test)]
pub(crate) mod tests;

pub use config::SessionConfig;
pub use manager::SessionManager;
