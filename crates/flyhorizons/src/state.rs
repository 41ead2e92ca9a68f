//! Shared application state.

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::FlightCatalog;
use crate::config::Config;

#[cfg(feature = "memory")]
pub type CacheBackend = crate::cache::MemoryCache;
#[cfg(feature = "redis")]
pub type CacheBackend = crate::cache::RedisCache;

#[cfg(feature = "inmemory")]
pub type Repository = crate::storage::InMemoryFlightRepository;
#[cfg(feature = "sqlite")]
pub type Repository = crate::storage::SqliteFlightRepository;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FlightCatalog<Repository, CacheBackend>>,
    pub ip_allowlist: Arc<Vec<String>>,
}

impl AppState {
    /// Wires up the feature-selected storage and cache backends.
    pub async fn new(config: &Config) -> Result<Self> {
        let repository = Arc::new(Self::build_repository(config).await?);
        let cache = Arc::new(Self::build_cache(config).await?);

        Ok(Self {
            catalog: Arc::new(FlightCatalog::new(repository, cache)),
            ip_allowlist: Arc::new(config.whitelisted_ips.clone()),
        })
    }

    #[cfg(feature = "inmemory")]
    async fn build_repository(_config: &Config) -> Result<Repository> {
        tracing::info!("using in-memory storage backend");
        Ok(crate::storage::InMemoryFlightRepository::new())
    }

    #[cfg(feature = "sqlite")]
    async fn build_repository(config: &Config) -> Result<Repository> {
        tracing::info!(path = %config.sqlite_path, "using sqlite storage backend");
        Ok(crate::storage::SqliteFlightRepository::new(&config.sqlite_path).await?)
    }

    #[cfg(feature = "memory")]
    async fn build_cache(config: &Config) -> Result<CacheBackend> {
        tracing::info!(
            max_entries = config.cache_max_entries,
            "using in-process cache backend"
        );
        Ok(crate::cache::MemoryCache::new(config.cache_max_entries))
    }

    #[cfg(feature = "redis")]
    async fn build_cache(config: &Config) -> Result<CacheBackend> {
        tracing::info!(url = %config.redis_url, "using redis cache backend");
        Ok(crate::cache::RedisCache::new(&config.redis_url).await?)
    }
}
