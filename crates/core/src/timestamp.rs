//! Unix timestamp conversions
//!
//! The current time is always passed in by the caller; nothing here reads
//! the clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

/// Values above this are read as milliseconds, values at or below as seconds.
pub const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampConversion {
    pub timestamp_ms: i64,
    pub iso: String,
}

/// Interpret `input` as seconds or milliseconds since the epoch.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| TimestampError::InvalidTimestamp(input.trim().to_string()))?;

    let millis = if value > MILLIS_THRESHOLD {
        value
    } else {
        value
            .checked_mul(1000)
            .ok_or(TimestampError::OutOfRange(value))?
    };

    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(TimestampError::OutOfRange(value))
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn to_iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn timestamp_to_iso(input: &str) -> Result<TimestampConversion, TimestampError> {
    let date = parse_timestamp(input)?;
    Ok(TimestampConversion {
        timestamp_ms: date.timestamp_millis(),
        iso: to_iso(&date),
    })
}

/// Parse a date string. Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`. Strings without an offset are UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(TimestampError::InvalidDate(input.to_string()))
}

pub fn date_to_timestamp(input: &str) -> Result<TimestampConversion, TimestampError> {
    let date = parse_date(input)?;
    Ok(TimestampConversion {
        timestamp_ms: date.timestamp_millis(),
        iso: to_iso(&date),
    })
}

/// Long form such as `Monday, January 1, 2024 at 03:04:05 PM`.
pub fn format_long<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%A, %B %-d, %Y at %I:%M:%S %p").to_string()
}
