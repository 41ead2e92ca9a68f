mod service;

pub use service::FlightCatalog;
