//! SQLite flight repository.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use flyhorizons_core::flight::FlightRecord;
use flyhorizons_core::storage::{FlightRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_record};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Repository backed by a single sqlite connection.
///
/// `tokio_rusqlite` serializes statements onto a dedicated thread, so the
/// connection is safe to share without extra locking.
pub struct SqliteFlightRepository {
    conn: Connection,
}

impl SqliteFlightRepository {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        let repository = Self { conn };
        repository.init_schema().await?;
        Ok(repository)
    }

    /// Opens an in-memory database, used by tests.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        let repository = Self { conn };
        repository.init_schema().await?;
        Ok(repository)
    }

    async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute(schema::CREATE_FLIGHTS_TABLE, [])?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }
}

#[async_trait]
impl FlightRepository for SqliteFlightRepository {
    async fn get_all(&self) -> Result<Vec<FlightRecord>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_FLIGHTS)?;
                let records = stmt
                    .query_map([], |row| row_to_record(row))?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }

    async fn get_by_code(&self, flight_code: &str) -> Result<Option<FlightRecord>> {
        let code = flight_code.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_FLIGHT_BY_CODE)?;
                let record = stmt
                    .query_row([&code], |row| row_to_record(row))
                    .map(Some)
                    .or_else(|e| match e {
                        rusqlite::Error::QueryReturnedNoRows => Ok(None),
                        other => Err(other),
                    })?;
                Ok(record)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, flight_code))
    }

    async fn create(&self, record: &FlightRecord) -> Result<FlightRecord> {
        let row = record.clone();
        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_FLIGHT,
                    rusqlite::params![
                        row.flight_code,
                        row.departure,
                        row.arrival,
                        row.duration_in_minutes,
                        format_datetime(&row.departure_time),
                        row.departure_days,
                        row.base_price,
                        format_datetime(&row.created_at),
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &record.flight_code))?;

        Ok(record.clone())
    }

    async fn update(&self, record: &FlightRecord) -> Result<FlightRecord> {
        let row = record.clone();
        let changed = self
            .conn
            .call(move |conn| {
                let changed = conn.execute(
                    schema::UPDATE_FLIGHT,
                    rusqlite::params![
                        row.flight_code,
                        row.departure,
                        row.arrival,
                        row.duration_in_minutes,
                        format_datetime(&row.departure_time),
                        row.departure_days,
                        row.base_price,
                    ],
                )?;
                Ok(changed)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &record.flight_code))?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Flight",
                id: record.flight_code.clone(),
            });
        }

        Ok(record.clone())
    }

    async fn delete_by_code(&self, flight_code: &str) -> Result<bool> {
        let code = flight_code.to_string();
        let deleted = self
            .conn
            .call(move |conn| {
                let deleted = conn.execute(schema::DELETE_FLIGHT_BY_CODE, [&code])?;
                Ok(deleted)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, flight_code))?;

        Ok(deleted > 0)
    }
}
