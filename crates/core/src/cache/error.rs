use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// The catalog treats the cache as best-effort: these errors are logged and
/// swallowed, never surfaced to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
