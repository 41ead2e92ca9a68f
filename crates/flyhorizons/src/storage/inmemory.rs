//! In-memory flight repository for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use flyhorizons_core::flight::FlightRecord;
use flyhorizons_core::storage::{FlightRepository, RepositoryError, Result};

/// Repository keeping all records in a process-local map, keyed by flight
/// code. State is lost on restart.
#[derive(Default)]
pub struct InMemoryFlightRepository {
    records: Arc<RwLock<HashMap<String, FlightRecord>>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn get_all(&self) -> Result<Vec<FlightRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get_by_code(&self, flight_code: &str) -> Result<Option<FlightRecord>> {
        let records = self.records.read().await;
        Ok(records.get(flight_code).cloned())
    }

    async fn create(&self, record: &FlightRecord) -> Result<FlightRecord> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.flight_code) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Flight",
                id: record.flight_code.clone(),
            });
        }
        records.insert(record.flight_code.clone(), record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &FlightRecord) -> Result<FlightRecord> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.flight_code) {
            return Err(RepositoryError::NotFound {
                entity_type: "Flight",
                id: record.flight_code.clone(),
            });
        }
        records.insert(record.flight_code.clone(), record.clone());
        Ok(record.clone())
    }

    async fn delete_by_code(&self, flight_code: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(flight_code).is_some())
    }
}
