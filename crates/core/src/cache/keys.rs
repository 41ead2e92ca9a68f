//! Cache key layout and expiries.
//!
//! Keys and TTLs are part of the observable contract: operators inspect
//! them directly, so the formats and durations must not drift.

use std::time::Duration;

/// Expiry for the full listing entry.
pub const ALL_FLIGHTS_TTL: Duration = Duration::from_secs(120);

/// Expiry for a single-flight entry.
pub const FLIGHT_TTL: Duration = Duration::from_secs(300);

/// Returns the cache key for the full flight listing.
pub fn all_flights_key() -> String {
    "flights:all".to_string()
}

/// Returns the cache key for a single flight.
pub fn flight_key(flight_code: &str) -> String {
    format!("flight:{}", flight_code)
}
