//! Storage backends, selected at compile time by feature flag.

#[cfg(feature = "inmemory")]
mod inmemory;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryFlightRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteFlightRepository;

#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!("features \"inmemory\" and \"sqlite\" are mutually exclusive");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("one of the features \"inmemory\" or \"sqlite\" must be enabled");
