//! The weekday label domain and its codecs.
//!
//! Weekdays are the recurrence unit for flights: a flight's schedule is a
//! set of weekdays it departs on. On the wire and in storage the set is a
//! compact JSON integer array (`"[1,3,5]"`, 1=Monday .. 7=Sunday).

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

use super::error::DayDecodeError;

/// A day of the week, numbered 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Returns the weekday of a timestamp in the server's local time zone.
    ///
    /// The local-zone conversion (not UTC) is part of the observable
    /// contract: a timestamp near midnight can map to different weekdays
    /// depending on where the server runs.
    pub fn from_datetime(ts: DateTime<Utc>) -> Self {
        ts.with_timezone(&Local).weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DayDecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            7 => Ok(Weekday::Sunday),
            other => Err(DayDecodeError::UnknownDay(other)),
        }
    }
}

/// Decodes a JSON integer array (`"[1,3,5]"`) into weekday labels.
///
/// Fails on malformed JSON and on integers outside 1..=7. Callers that
/// convert storage records are expected to substitute an empty set rather
/// than propagate the error.
pub fn decode_days(text: &str) -> Result<Vec<Weekday>, DayDecodeError> {
    serde_json::from_str(text).map_err(|e| DayDecodeError::Malformed(e.to_string()))
}

/// Encodes weekday labels into the compact JSON integer array form.
pub fn encode_days(days: &[Weekday]) -> Result<String, DayDecodeError> {
    serde_json::to_string(days).map_err(|e| DayDecodeError::Malformed(e.to_string()))
}

/// Order-independent membership test on a weekday set.
pub fn contains_day(days: &[Weekday], target: Weekday) -> bool {
    days.contains(&target)
}
