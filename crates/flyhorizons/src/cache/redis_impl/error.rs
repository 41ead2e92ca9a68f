use flyhorizons_core::cache::CacheError;

/// Maps a redis error to the backend-neutral [`CacheError`].
pub(super) fn map_redis_error(error: redis::RedisError) -> CacheError {
    if error.is_connection_refusal() || error.is_timeout() || error.is_connection_dropped() {
        CacheError::ConnectionFailed(error.to_string())
    } else {
        CacheError::OperationFailed(error.to_string())
    }
}
