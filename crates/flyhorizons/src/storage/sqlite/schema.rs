//! SQL statements for the flights table.
//!
//! Timestamps are stored as RFC 3339 text and departure days as the JSON
//! array string carried by the record, so rows stay greppable with the
//! sqlite3 shell.

pub const CREATE_FLIGHTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS flights (
    flight_code TEXT PRIMARY KEY,
    departure TEXT NOT NULL,
    arrival TEXT NOT NULL,
    duration_in_minutes INTEGER NOT NULL,
    departure_time TEXT NOT NULL,
    departure_days TEXT NOT NULL,
    base_price REAL NOT NULL,
    created_at TEXT NOT NULL
)";

pub const SELECT_ALL_FLIGHTS: &str = "
SELECT flight_code, departure, arrival, duration_in_minutes,
       departure_time, departure_days, base_price, created_at
FROM flights";

pub const SELECT_FLIGHT_BY_CODE: &str = "
SELECT flight_code, departure, arrival, duration_in_minutes,
       departure_time, departure_days, base_price, created_at
FROM flights
WHERE flight_code = ?1";

pub const INSERT_FLIGHT: &str = "
INSERT INTO flights (flight_code, departure, arrival, duration_in_minutes,
                     departure_time, departure_days, base_price, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

pub const UPDATE_FLIGHT: &str = "
UPDATE flights
SET departure = ?2, arrival = ?3, duration_in_minutes = ?4,
    departure_time = ?5, departure_days = ?6, base_price = ?7
WHERE flight_code = ?1";

pub const DELETE_FLIGHT_BY_CODE: &str = "DELETE FROM flights WHERE flight_code = ?1";
