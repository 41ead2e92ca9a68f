mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{all_flights_key, flight_key, ALL_FLIGHTS_TTL, FLIGHT_TTL};
pub use serialization::{
    deserialize_flight, deserialize_flights, serialize_flight, serialize_flights,
    SerializationError,
};
pub use traits::Cache;
