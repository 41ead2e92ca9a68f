//! Redis cache backend.

use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

use flyhorizons_core::cache::{Cache, CacheError, Result};

use super::error::map_redis_error;

/// Cache backed by a shared Redis connection.
///
/// The [`ConnectionManager`] reconnects on its own, so a restarted Redis
/// shows up as a few failed (and swallowed) operations rather than a dead
/// client.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    /// Connects to the Redis instance at `url`.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut connection = self.connection.clone();
        connection.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut connection = self.connection.clone();
        match ttl {
            Some(ttl) => connection
                .set_ex(key, value, ttl.as_secs())
                .await
                .map_err(map_redis_error),
            None => connection.set(key, value).await.map_err(map_redis_error),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut connection = self.connection.clone();
        connection.del(key).await.map_err(map_redis_error)
    }
}
