mod error;
mod flights;
mod health;
mod search;

pub use flights::{create_flight, delete_flight, get_flight, list_flights, update_flight};
pub use health::{healthz, livez};
pub use search::filter_flights;
