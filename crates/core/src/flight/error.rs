use thiserror::Error;

/// Errors that can occur while encoding or decoding the weekday set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DayDecodeError {
    #[error("Malformed weekday encoding: {0}")]
    Malformed(String),
    #[error("Unknown weekday code: {0}")]
    UnknownDay(u8),
}
