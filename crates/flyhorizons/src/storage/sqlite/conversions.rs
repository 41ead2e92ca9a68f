//! Row/record conversions for the sqlite backend.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

use flyhorizons_core::flight::FlightRecord;

pub(super) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub(super) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

pub(super) fn row_to_record(row: &Row<'_>) -> Result<FlightRecord, rusqlite::Error> {
    let departure_time: String = row.get(4)?;
    let created_at: String = row.get(7)?;
    Ok(FlightRecord {
        flight_code: row.get(0)?,
        departure: row.get(1)?,
        arrival: row.get(2)?,
        duration_in_minutes: row.get(3)?,
        departure_time: parse_datetime(&departure_time)?,
        departure_days: row.get(5)?,
        base_price: row.get(6)?,
        created_at: parse_datetime(&created_at)?,
    })
}
