use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::weekday::Weekday;

/// The public shape of a flight: a route, a representative departure time
/// and the weekdays it recurs on.
///
/// The JSON field names are the wire contract and must stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique, stable, non-empty flight code (e.g. "FR789").
    pub flight_code: String,
    /// Departure airport code.
    pub departure: String,
    /// Arrival airport code.
    pub arrival: String,
    pub duration_in_minutes: u32,
    /// Representative departure timestamp for a recurring flight.
    pub departure_time: DateTime<Utc>,
    /// Weekdays the flight departs on; order carries no meaning.
    #[serde(default)]
    pub departure_days: Vec<Weekday>,
    pub base_price: f64,
}

/// The storage shape of a flight.
///
/// Identical to [`Flight`] except that the weekday set is a JSON integer
/// array stored as text, and a creation timestamp is stamped by the
/// converter when the record is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_code: String,
    pub departure: String,
    pub arrival: String,
    pub duration_in_minutes: u32,
    pub departure_time: DateTime<Utc>,
    /// JSON integer array, e.g. `"[1,5]"`.
    pub departure_days: String,
    pub base_price: f64,
    /// Set at conversion time, never caller-supplied.
    pub created_at: DateTime<Utc>,
}
