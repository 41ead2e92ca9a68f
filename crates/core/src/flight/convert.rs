//! Conversion between the storage and public flight shapes.
//!
//! Both directions are total: a malformed stored weekday encoding degrades
//! to an empty set instead of failing the caller, and an encode failure
//! degrades to the empty array. The storage direction stamps `created_at`
//! with the current time, discarding anything the caller supplied.

use chrono::Utc;

use super::types::{Flight, FlightRecord};
use super::weekday::{decode_days, encode_days};

/// Converts a storage record into the public flight shape.
pub fn record_to_flight(record: &FlightRecord) -> Flight {
    let departure_days = decode_days(&record.departure_days).unwrap_or_default();

    Flight {
        flight_code: record.flight_code.clone(),
        departure: record.departure.clone(),
        arrival: record.arrival.clone(),
        duration_in_minutes: record.duration_in_minutes,
        departure_time: record.departure_time,
        departure_days,
        base_price: record.base_price,
    }
}

/// Converts a public flight into its storage record.
pub fn flight_to_record(flight: &Flight) -> FlightRecord {
    let departure_days =
        encode_days(&flight.departure_days).unwrap_or_else(|_| "[]".to_string());

    FlightRecord {
        flight_code: flight.flight_code.clone(),
        departure: flight.departure.clone(),
        arrival: flight.arrival.clone(),
        duration_in_minutes: flight.duration_in_minutes,
        departure_time: flight.departure_time,
        departure_days,
        base_price: flight.base_price,
        created_at: Utc::now(),
    }
}
