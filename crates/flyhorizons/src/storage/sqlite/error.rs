//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `flyhorizons_core::storage`. Constraint violations become semantic
//! variants; everything else degrades to `QueryFailed`.

use flyhorizons_core::storage::RepositoryError;

fn map_rusqlite_error(err: &rusqlite::Error, flight_code: &str) -> RepositoryError {
    match err {
        // Duplicate flight code, reported either as a UNIQUE or a PRIMARY
        // KEY violation depending on the sqlite version.
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RepositoryError::AlreadyExists {
                entity_type: "Flight",
                id: flight_code.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type: "Flight",
            id: flight_code.to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a [`RepositoryError`].
///
/// `flight_code` identifies the row the failed statement targeted; pass an
/// empty string for statements that target no single row.
pub(super) fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    flight_code: &str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, flight_code)
        }
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
