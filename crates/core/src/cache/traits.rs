use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
///
/// Implementations are shared, externally-synchronized clients: the catalog
/// holds no lock state between calls.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key; `None` on a miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key; deleting an absent key is a
    /// no-op, not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
