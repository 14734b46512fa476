//! Authentication route handlers
//!
//! - `POST /login` exchanges credentials for a session token
//! - `GET /session` describes the session behind a bearer token

pub mod login;
pub mod session;

pub use login::login;
pub use session::current_session;
