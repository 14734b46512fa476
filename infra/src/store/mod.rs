//! Session store implementations
//!
//! Both stores keep a record under its token and a pointer from the owner's
//! username to that token. A username pointer is only removed by the delete
//! of the token it points at, so deleting a shadowed record never orphans the
//! newer one.

mod backend;
mod memory_store;
mod redis_store;

#[cfg(test)]
mod tests;

pub use backend::{connect_session_store, SessionStoreBackend};
pub use memory_store::InMemorySessionStore;
pub use redis_store::RedisSessionStore;

/// Key namespace for records indexed by token
pub const TOKEN_KEY_PREFIX: &str = "session:token";

/// Key namespace for username to token pointers
pub const USER_KEY_PREFIX: &str = "session:user";
