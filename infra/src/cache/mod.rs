//! Cache module for Redis-based storage
//!
//! Provides the Redis client used by the session store: a multiplexed
//! connection, retry with exponential backoff, and the handful of commands
//! the session key layout needs.

pub mod redis_client;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;

// Re-export commonly used types
pub use sv_shared::config::CacheConfig;
