//! Catalog-level error taxonomy.
//!
//! Conflict and NotFound are the only conditions the catalog raises
//! deliberately; repository failures pass through unclassified and cache
//! failures are absorbed before they reach this type.

use thiserror::Error;

use crate::storage::{repository_error_to_status_code, RepositoryError};

/// Errors surfaced by the flight catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Create was asked for a code that already exists.
    #[error("Flight with the code {0} already exists")]
    Conflict(String),
    /// Update/Delete/GetByCode was asked for a code that does not exist.
    #[error("Flight with the code {0} was not found")]
    NotFound(String),
    /// Opaque repository failure, passed through unmodified.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Maps a [`CatalogError`] to an HTTP status code.
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::Conflict(_) => 409,
        CatalogError::NotFound(_) => 404,
        CatalogError::Repository(e) => repository_error_to_status_code(e),
    }
}
