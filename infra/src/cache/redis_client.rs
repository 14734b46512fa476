//! Redis cache client implementation
//!
//! This module provides a Redis client with a multiplexed connection, retry
//! logic, and the cache operations used by the session store: get, delete,
//! compare-and-delete, and an atomic write of several keys sharing one expiry.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult, Script};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::cache::CacheConfig;
use crate::InfrastructureError;

/// Deletes `KEYS[1]` only while it still holds `ARGV[1]`
const DELETE_IF_EQUALS_SCRIPT: &str = r#"
if redis.call('GET', KEYS[1]) == ARGV[1] then
    return redis.call('DEL', KEYS[1])
else
    return 0
end
"#;

/// Upper bound for the exponential backoff between attempts
const MAX_RETRY_DELAY_MS: u64 = 5000;

/// Redis cache client with connection pooling and retry logic
///
/// Provides a thread-safe, async Redis client with automatic connection
/// management and retry capabilities for resilient cache operations.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Connect to the Redis server named in `config`
    ///
    /// Connection attempts are retried `config.max_retries` times with
    /// exponential backoff starting at `config.retry_delay_ms`.
    ///
    /// # Example
    /// ```no_run
    /// use sv_infra::cache::{CacheConfig, RedisClient};
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379").with_prefix("sv");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        // Parse Redis URL and create client
        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection =
            Self::create_connection_with_retry(client, config.max_retries, config.retry_delay_ms)
                .await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    /// Configuration used to create this client
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = next_delay(delay);
                }
                Err(e) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key found
    /// * `Ok(None)` - Key not found or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", redact_key(key));

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                Box::pin(async move { conn.get::<_, Option<String>>(key).await })
            })
            .await;

        result.map_err(|e| {
            error!("Failed to get key '{}': {}", redact_key(key), e);
            InfrastructureError::Cache(e)
        })
    }

    /// Write every `(key, value)` pair with the same expiry in one `MULTI` block
    ///
    /// Either all keys are written or none are.
    pub async fn set_all_with_expiry(
        &self,
        entries: &[(String, String)],
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!(
            "Setting {} keys atomically with expiry {}s",
            entries.len(),
            expiry_seconds
        );

        let result = self
            .execute_with_retry(|mut conn| {
                let entries = entries.to_vec();
                Box::pin(async move {
                    let mut pipe = redis::pipe();
                    pipe.atomic();
                    for (key, value) in &entries {
                        pipe.set_ex(key, value, expiry_seconds).ignore();
                    }
                    pipe.query_async::<_, ()>(&mut conn).await
                })
            })
            .await;

        result.map_err(|e| {
            error!("Failed to write {} keys: {}", entries.len(), e);
            InfrastructureError::Cache(e)
        })
    }

    /// Delete a key from cache
    ///
    /// # Returns
    /// * `Ok(true)` - Key was deleted
    /// * `Ok(false)` - Key was not found
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", redact_key(key));

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                Box::pin(async move { conn.del::<_, u32>(key).await })
            })
            .await;

        match result {
            Ok(deleted_count) => Ok(deleted_count > 0),
            Err(e) => {
                error!("Failed to delete key '{}': {}", redact_key(key), e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Delete `key` only if it currently holds `expected`
    ///
    /// The comparison and the delete run server-side in one script, so a
    /// value written concurrently by another writer is never removed.
    pub async fn delete_if_equals(
        &self,
        key: &str,
        expected: &str,
    ) -> Result<bool, InfrastructureError> {
        debug!("Conditionally deleting key '{}'", redact_key(key));

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                let expected = expected.to_string();
                Box::pin(async move {
                    Script::new(DELETE_IF_EQUALS_SCRIPT)
                        .key(key)
                        .arg(expected)
                        .invoke_async::<_, u32>(&mut conn)
                        .await
                })
            })
            .await;

        match result {
            Ok(deleted_count) => Ok(deleted_count > 0),
            Err(e) => {
                error!("Failed to conditionally delete key '{}': {}", redact_key(key), e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let result = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await;

        match result {
            Ok(response) if response == "PONG" => Ok(true),
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Execute a Redis operation with automatic retry logic
    ///
    /// Transient failures are retried with exponential backoff, up to
    /// `max_retries` attempts in total.
    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(
            MultiplexedConnection,
        ) -> std::pin::Pin<Box<dyn std::future::Future<Output = RedisResult<T>> + Send>>,
    {
        let max_retries = self.config.max_retries;
        let mut attempts = 0;
        let mut delay = self.config.retry_delay_ms;

        loop {
            attempts += 1;
            let conn = self.connection.clone();

            match operation(conn).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = next_delay(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Doubles the backoff delay, capped at five seconds
pub(crate) fn next_delay(delay_ms: u64) -> u64 {
    delay_ms.saturating_mul(2).min(MAX_RETRY_DELAY_MS)
}

/// Check if a Redis error is retriable
///
/// Determines if an error is transient and the operation should be retried.
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask sensitive parts of Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}

/// Keep a key's namespace but hide its last segment.
///
/// Session keys end in a token or username, neither of which belongs in logs.
pub(crate) fn redact_key(key: &str) -> String {
    match key.rfind(':') {
        Some(pos) => format!("{}:***", &key[..pos]),
        None => "***".to_string(),
    }
}
