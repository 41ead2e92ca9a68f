//! Pure functions for serializing flights to/from cache bytes.
//!
//! JSON keeps cached values human-readable for operators inspecting the
//! cache directly. Both the listing and the single-flight entries store the
//! public [`Flight`] shape.

use thiserror::Error;

use crate::flight::Flight;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a single flight to JSON bytes.
pub fn serialize_flight(flight: &Flight) -> Result<Vec<u8>> {
    serde_json::to_vec(flight).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a single flight.
pub fn deserialize_flight(bytes: &[u8]) -> Result<Flight> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a flight listing to JSON bytes.
pub fn serialize_flights(flights: &[Flight]) -> Result<Vec<u8>> {
    serde_json::to_vec(flights).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a flight listing.
pub fn deserialize_flights(bytes: &[u8]) -> Result<Vec<Flight>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
