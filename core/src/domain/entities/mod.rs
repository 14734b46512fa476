//! Domain entities representing core business objects.

pub mod session;
pub mod token;

// Re-export commonly used types
pub use session::{Principal, SessionRecord};
pub use token::{Claims, IssuedToken, TokenStatus, JWT_AUDIENCE, JWT_ISSUER};
