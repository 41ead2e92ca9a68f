//! Cache-aside flight catalog.
//!
//! Reads go through the cache first and backfill it on a miss; writes go to
//! the repository and then invalidate both the listing entry and the
//! per-flight entry. Cache failures on any path are logged and swallowed, so
//! a degraded cache never takes the catalog down with it.

use std::sync::Arc;

use flyhorizons_core::{
    cache::{
        all_flights_key, deserialize_flight, deserialize_flights, flight_key, serialize_flight,
        serialize_flights, Cache, ALL_FLIGHTS_TTL, FLIGHT_TTL,
    },
    catalog::{CatalogError, Result},
    flight::{flight_to_record, record_to_flight, Flight},
    storage::FlightRepository,
};

/// Flight catalog backed by a repository with a read-through cache.
pub struct FlightCatalog<R: FlightRepository, C: Cache> {
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R: FlightRepository, C: Cache> FlightCatalog<R, C> {
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    /// Returns every flight, serving from the cache when possible.
    ///
    /// A cache hit that fails to deserialize is treated as a miss and
    /// overwritten by the backfill.
    pub async fn get_all(&self) -> Result<Vec<Flight>> {
        let key = all_flights_key();

        if let Ok(Some(bytes)) = self.cache.get(&key).await {
            match deserialize_flights(&bytes) {
                Ok(flights) => {
                    tracing::debug!(key = %key, "cache hit for flight listing");
                    return Ok(flights);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "discarding undecodable cache entry");
                }
            }
        }

        let records = self.repository.get_all().await?;
        let flights: Vec<Flight> = records.iter().map(record_to_flight).collect();

        match serialize_flights(&flights) {
            Ok(bytes) => {
                if let Err(e) = self.cache.set(&key, &bytes, Some(ALL_FLIGHTS_TTL)).await {
                    tracing::warn!(key = %key, error = %e, "failed to backfill flight listing");
                }
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to serialize flight listing");
            }
        }

        Ok(flights)
    }

    /// Returns the flight for a code, serving from the cache when possible.
    pub async fn get_by_code(&self, flight_code: &str) -> Result<Flight> {
        let key = flight_key(flight_code);

        if let Ok(Some(bytes)) = self.cache.get(&key).await {
            match deserialize_flight(&bytes) {
                Ok(flight) => {
                    tracing::debug!(key = %key, "cache hit for flight");
                    return Ok(flight);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "discarding undecodable cache entry");
                }
            }
        }

        let record = self
            .repository
            .get_by_code(flight_code)
            .await?
            .ok_or_else(|| CatalogError::NotFound(flight_code.to_string()))?;
        let flight = record_to_flight(&record);

        match serialize_flight(&flight) {
            Ok(bytes) => {
                if let Err(e) = self.cache.set(&key, &bytes, Some(FLIGHT_TTL)).await {
                    tracing::warn!(key = %key, error = %e, "failed to backfill flight");
                }
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to serialize flight");
            }
        }

        Ok(flight)
    }

    /// Returns whether a flight with the given code exists.
    ///
    /// Goes through [`get_all`](Self::get_all) so the answer benefits from
    /// (and is bounded by) the listing cache.
    pub async fn exists(&self, flight_code: &str) -> Result<bool> {
        let flights = self.get_all().await?;
        Ok(flights.iter().any(|f| f.flight_code == flight_code))
    }

    /// Creates a new flight. Fails with [`CatalogError::Conflict`] when the
    /// code is already taken.
    pub async fn create(&self, flight: &Flight) -> Result<Flight> {
        if self.exists(&flight.flight_code).await? {
            return Err(CatalogError::Conflict(flight.flight_code.clone()));
        }

        let record = flight_to_record(flight);
        let created = self.repository.create(&record).await?;
        self.invalidate(&flight.flight_code).await;

        Ok(record_to_flight(&created))
    }

    /// Replaces an existing flight. Fails with [`CatalogError::NotFound`]
    /// when the code is unknown.
    pub async fn update(&self, flight: &Flight) -> Result<Flight> {
        if !self.exists(&flight.flight_code).await? {
            return Err(CatalogError::NotFound(flight.flight_code.clone()));
        }

        let record = flight_to_record(flight);
        let updated = self.repository.update(&record).await?;
        self.invalidate(&flight.flight_code).await;

        Ok(record_to_flight(&updated))
    }

    /// Deletes a flight by code. Fails with [`CatalogError::NotFound`] when
    /// the code is unknown; otherwise returns the repository's deletion
    /// outcome.
    pub async fn delete_by_code(&self, flight_code: &str) -> Result<bool> {
        if !self.exists(flight_code).await? {
            return Err(CatalogError::NotFound(flight_code.to_string()));
        }

        let deleted = self.repository.delete_by_code(flight_code).await?;
        self.invalidate(flight_code).await;

        Ok(deleted)
    }

    /// Best-effort invalidation of both entries touched by a write.
    async fn invalidate(&self, flight_code: &str) {
        let key = flight_key(flight_code);
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!(key = %key, error = %e, "failed to invalidate flight entry");
        }

        let key = all_flights_key();
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!(key = %key, error = %e, "failed to invalidate flight listing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryFlightRepository;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use flyhorizons_core::cache::CacheError;
    use flyhorizons_core::flight::{FlightRecord, Weekday};
    use flyhorizons_core::storage::{self, RepositoryError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn test_flight(code: &str) -> Flight {
        Flight {
            flight_code: code.to_string(),
            departure: "EIN".to_string(),
            arrival: "BLQ".to_string(),
            duration_in_minutes: 120,
            departure_time: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
            departure_days: vec![Weekday::Monday, Weekday::Friday],
            base_price: 59.99,
        }
    }

    fn catalog() -> FlightCatalog<InMemoryFlightRepository, MemoryCache> {
        FlightCatalog::new(
            Arc::new(InMemoryFlightRepository::new()),
            Arc::new(MemoryCache::new(64)),
        )
    }

    /// Repository wrapper that counts calls per operation.
    struct CountingRepository {
        inner: InMemoryFlightRepository,
        get_all_calls: AtomicUsize,
        get_by_code_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl CountingRepository {
        fn new() -> Self {
            Self {
                inner: InMemoryFlightRepository::new(),
                get_all_calls: AtomicUsize::new(0),
                get_by_code_calls: AtomicUsize::new(0),
                delete_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FlightRepository for CountingRepository {
        async fn get_all(&self) -> storage::Result<Vec<FlightRecord>> {
            self.get_all_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_all().await
        }

        async fn get_by_code(&self, flight_code: &str) -> storage::Result<Option<FlightRecord>> {
            self.get_by_code_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_by_code(flight_code).await
        }

        async fn create(&self, record: &FlightRecord) -> storage::Result<FlightRecord> {
            self.inner.create(record).await
        }

        async fn update(&self, record: &FlightRecord) -> storage::Result<FlightRecord> {
            self.inner.update(record).await
        }

        async fn delete_by_code(&self, flight_code: &str) -> storage::Result<bool> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.delete_by_code(flight_code).await
        }
    }

    /// Cache double that records set/delete calls and their TTLs.
    #[derive(Default)]
    struct RecordingCache {
        sets: Mutex<Vec<(String, Option<Duration>)>>,
        deletes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Cache for RecordingCache {
        async fn get(&self, _key: &str) -> flyhorizons_core::cache::Result<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn set(
            &self,
            key: &str,
            _value: &[u8],
            ttl: Option<Duration>,
        ) -> flyhorizons_core::cache::Result<()> {
            self.sets.lock().unwrap().push((key.to_string(), ttl));
            Ok(())
        }

        async fn delete(&self, key: &str) -> flyhorizons_core::cache::Result<()> {
            self.deletes.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    /// Cache double that fails every operation.
    struct FailingCache;

    #[async_trait]
    impl Cache for FailingCache {
        async fn get(&self, _key: &str) -> flyhorizons_core::cache::Result<Option<Vec<u8>>> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn set(
            &self,
            _key: &str,
            _value: &[u8],
            _ttl: Option<Duration>,
        ) -> flyhorizons_core::cache::Result<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn delete(&self, _key: &str) -> flyhorizons_core::cache::Result<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_code() {
        let catalog = catalog();
        let flight = test_flight("FR789");

        let created = catalog.create(&flight).await.expect("create should succeed");
        assert_eq!(created, flight);

        let fetched = catalog
            .get_by_code("FR789")
            .await
            .expect("get_by_code should succeed");
        assert_eq!(fetched, flight);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let catalog = catalog();
        let flight = test_flight("FR789");

        catalog.create(&flight).await.expect("create should succeed");
        let result = catalog.create(&flight).await;
        assert_eq!(result, Err(CatalogError::Conflict("FR789".to_string())));
    }

    #[tokio::test]
    async fn test_get_by_code_unknown_is_not_found() {
        let catalog = catalog();
        let result = catalog.get_by_code("FR000").await;
        assert_eq!(result, Err(CatalogError::NotFound("FR000".to_string())));
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let catalog = catalog();
        let flights = catalog.get_all().await.expect("get_all should succeed");
        assert!(flights.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_serves_second_read_from_cache() {
        let repository = Arc::new(CountingRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::new(MemoryCache::new(64)));

        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");
        let baseline = repository.get_all_calls.load(Ordering::SeqCst);

        catalog.get_all().await.expect("first read should succeed");
        catalog.get_all().await.expect("second read should succeed");

        // Only the first read after the write should reach the repository.
        assert_eq!(repository.get_all_calls.load(Ordering::SeqCst), baseline + 1);
    }

    #[tokio::test]
    async fn test_backfill_uses_contract_ttls() {
        let cache = Arc::new(RecordingCache::default());
        let repository = Arc::new(InMemoryFlightRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::clone(&cache));

        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");
        cache.sets.lock().unwrap().clear();

        catalog.get_all().await.expect("get_all should succeed");
        catalog
            .get_by_code("FR789")
            .await
            .expect("get_by_code should succeed");

        let sets = cache.sets.lock().unwrap();
        assert!(sets.contains(&("flights:all".to_string(), Some(ALL_FLIGHTS_TTL))));
        assert!(sets.contains(&("flight:FR789".to_string(), Some(FLIGHT_TTL))));
    }

    #[tokio::test]
    async fn test_writes_invalidate_both_keys() {
        let cache = Arc::new(RecordingCache::default());
        let repository = Arc::new(InMemoryFlightRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::clone(&cache));

        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");

        let deletes = cache.deletes.lock().unwrap().clone();
        assert_eq!(
            deletes,
            vec!["flight:FR789".to_string(), "flights:all".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cached_get_by_code_skips_repository() {
        let repository = Arc::new(CountingRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::new(MemoryCache::new(64)));

        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");

        catalog.get_by_code("FR789").await.expect("miss should load");
        catalog.get_by_code("FR789").await.expect("hit should serve");

        // Only the miss reaches the repository; the second call is served
        // from the backfilled entry.
        assert_eq!(repository.get_by_code_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_conflicting_create_does_not_invalidate() {
        let cache = Arc::new(RecordingCache::default());
        let repository = Arc::new(InMemoryFlightRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::clone(&cache));

        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");
        cache.deletes.lock().unwrap().clear();

        let result = catalog.create(&test_flight("FR789")).await;
        assert_eq!(result, Err(CatalogError::Conflict("FR789".to_string())));
        assert!(cache.deletes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_never_reaches_repository() {
        let repository = Arc::new(CountingRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::new(MemoryCache::new(64)));

        let result = catalog.delete_by_code("FR000").await;
        assert_eq!(result, Err(CatalogError::NotFound("FR000".to_string())));
        assert_eq!(repository.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let catalog = catalog();
        let result = catalog.update(&test_flight("FR000")).await;
        assert_eq!(result, Err(CatalogError::NotFound("FR000".to_string())));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let catalog = catalog();
        let mut flight = test_flight("FR789");
        catalog.create(&flight).await.expect("create should succeed");

        flight.base_price = 79.99;
        let updated = catalog.update(&flight).await.expect("update should succeed");
        assert_eq!(updated.base_price, 79.99);

        let fetched = catalog
            .get_by_code("FR789")
            .await
            .expect("get_by_code should succeed");
        assert_eq!(fetched.base_price, 79.99);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let catalog = catalog();
        let result = catalog.delete_by_code("FR000").await;
        assert_eq!(result, Err(CatalogError::NotFound("FR000".to_string())));
    }

    #[tokio::test]
    async fn test_delete_removes_flight() {
        let catalog = catalog();
        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");

        let deleted = catalog
            .delete_by_code("FR789")
            .await
            .expect("delete should succeed");
        assert!(deleted);

        let result = catalog.get_by_code("FR789").await;
        assert_eq!(result, Err(CatalogError::NotFound("FR789".to_string())));
    }

    #[tokio::test]
    async fn test_delete_false_without_error_is_propagated() {
        /// Claims the flight exists but reports nothing removed on delete.
        struct PhantomDeleteRepository;

        #[async_trait]
        impl FlightRepository for PhantomDeleteRepository {
            async fn get_all(&self) -> storage::Result<Vec<FlightRecord>> {
                Ok(vec![flight_to_record(&test_flight("FR789"))])
            }

            async fn get_by_code(&self, _: &str) -> storage::Result<Option<FlightRecord>> {
                Ok(Some(flight_to_record(&test_flight("FR789"))))
            }

            async fn create(&self, record: &FlightRecord) -> storage::Result<FlightRecord> {
                Ok(record.clone())
            }

            async fn update(&self, record: &FlightRecord) -> storage::Result<FlightRecord> {
                Ok(record.clone())
            }

            async fn delete_by_code(&self, _: &str) -> storage::Result<bool> {
                Ok(false)
            }
        }

        let catalog =
            FlightCatalog::new(Arc::new(PhantomDeleteRepository), Arc::new(MemoryCache::new(64)));
        let deleted = catalog
            .delete_by_code("FR789")
            .await
            .expect("delete should succeed");
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_stale_listing_never_served_after_write() {
        let catalog = catalog();
        catalog
            .create(&test_flight("FR788"))
            .await
            .expect("create should succeed");

        // Warm the listing entry, then write through the catalog.
        assert_eq!(catalog.get_all().await.unwrap().len(), 1);
        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");

        assert_eq!(catalog.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_catalog_survives_failing_cache() {
        let repository = Arc::new(InMemoryFlightRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::new(FailingCache));
        let flight = test_flight("FR789");

        catalog.create(&flight).await.expect("create should succeed");
        let fetched = catalog
            .get_by_code("FR789")
            .await
            .expect("get_by_code should succeed");
        assert_eq!(fetched, flight);
        assert_eq!(catalog.get_all().await.unwrap().len(), 1);

        assert!(catalog
            .delete_by_code("FR789")
            .await
            .expect("delete should succeed"));
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_falls_back_to_repository() {
        let cache = Arc::new(MemoryCache::new(64));
        let repository = Arc::new(InMemoryFlightRepository::new());
        let catalog = FlightCatalog::new(Arc::clone(&repository), Arc::clone(&cache));

        catalog
            .create(&test_flight("FR789"))
            .await
            .expect("create should succeed");
        cache
            .set(&all_flights_key(), b"garbage", None)
            .await
            .expect("set should succeed");

        let flights = catalog.get_all().await.expect("get_all should succeed");
        assert_eq!(flights.len(), 1);
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        struct BrokenRepository;

        #[async_trait]
        impl FlightRepository for BrokenRepository {
            async fn get_all(&self) -> storage::Result<Vec<FlightRecord>> {
                Err(RepositoryError::ConnectionFailed("down".to_string()))
            }

            async fn get_by_code(&self, _: &str) -> storage::Result<Option<FlightRecord>> {
                Err(RepositoryError::ConnectionFailed("down".to_string()))
            }

            async fn create(&self, _: &FlightRecord) -> storage::Result<FlightRecord> {
                Err(RepositoryError::ConnectionFailed("down".to_string()))
            }

            async fn update(&self, _: &FlightRecord) -> storage::Result<FlightRecord> {
                Err(RepositoryError::ConnectionFailed("down".to_string()))
            }

            async fn delete_by_code(&self, _: &str) -> storage::Result<bool> {
                Err(RepositoryError::ConnectionFailed("down".to_string()))
            }
        }

        let catalog = FlightCatalog::new(Arc::new(BrokenRepository), Arc::new(MemoryCache::new(64)));
        let result = catalog.get_all().await;
        assert!(matches!(result, Err(CatalogError::Repository(_))));
    }
}
