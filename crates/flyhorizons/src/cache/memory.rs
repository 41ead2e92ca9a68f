//! In-process LRU cache backend.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use flyhorizons_core::cache::{Cache, Result};

struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// LRU cache with per-entry TTLs.
///
/// Expiry is lazy: an expired entry is dropped on the next read that touches
/// it, or evicted by capacity pressure like any other entry. There is no
/// background sweeper.
pub struct MemoryCache {
    entries: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` values.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.pop(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let entry = CacheEntry {
            value: value.to_vec(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.write().await.put(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = MemoryCache::new(8);
        assert_eq!(cache.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(8);
        cache.set("key", b"value", None).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::new(8);
        cache.set("key", b"old", None).await.unwrap();
        cache.set("key", b"new", None).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new(8);
        cache.set("key", b"value", None).await.unwrap();
        cache.delete("key").await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let cache = MemoryCache::new(8);
        assert!(cache.delete("absent").await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_miss() {
        let cache = MemoryCache::new(8);
        cache
            .set("key", b"value", Some(Duration::from_nanos(1)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(cache.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let cache = MemoryCache::new(2);
        cache.set("a", b"1", None).await.unwrap();
        cache.set("b", b"2", None).await.unwrap();
        cache.get("a").await.unwrap();
        cache.set("c", b"3", None).await.unwrap();

        assert_eq!(cache.get("a").await.unwrap(), Some(b"1".to_vec()));
        assert_eq!(cache.get("b").await.unwrap(), None);
        assert_eq!(cache.get("c").await.unwrap(), Some(b"3".to_vec()));
    }
}
