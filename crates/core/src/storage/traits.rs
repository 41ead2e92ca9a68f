use async_trait::async_trait;

use crate::flight::FlightRecord;

use super::Result;

/// Repository trait for flight data access.
///
/// Uniqueness of the flight code is enforced here, at the storage layer:
/// the catalog performs a pre-write existence check but adds no optimistic
/// concurrency control, so racing creates for the same code resolve by the
/// second insert being rejected.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Returns every stored flight record.
    async fn get_all(&self) -> Result<Vec<FlightRecord>>;

    /// Returns the record for a flight code, or `None` if absent.
    async fn get_by_code(&self, flight_code: &str) -> Result<Option<FlightRecord>>;

    /// Inserts a new record and returns the persisted row.
    async fn create(&self, record: &FlightRecord) -> Result<FlightRecord>;

    /// Replaces an existing record and returns the persisted row.
    async fn update(&self, record: &FlightRecord) -> Result<FlightRecord>;

    /// Deletes by flight code; returns whether a row was removed.
    async fn delete_by_code(&self, flight_code: &str) -> Result<bool>;
}
