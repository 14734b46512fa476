//! Business services containing the session token lifecycle.

pub mod auth;
pub mod clock;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, CredentialVerifier, LoginResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{SessionConfig, SessionManager};
pub use token::{TokenCodec, TokenCodecConfig};
