//! Embed timestamp normalization
//!
//! The payload builder forwards `Embed::timestamp` untouched, so whatever
//! sets it is expected to go through here first.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp: {0}")]
pub struct InvalidTimestamp(pub String);

/// Formats an instant the way embeds carry it: UTC, millisecond precision,
/// `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Normalizes user input into an embed timestamp.
///
/// Accepts RFC 3339 with any offset, a local `YYYY-MM-DDTHH:MM[:SS]` taken
/// as UTC, or a bare date (noon UTC). Blank input clears the timestamp.
pub fn normalize_timestamp(raw: &str) -> Result<Option<String>, InvalidTimestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(format_timestamp(at.with_timezone(&Utc))));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(format_timestamp(naive.and_utc())));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
        return Ok(Some(format_timestamp(date.and_time(noon).and_utc())));
    }

    Err(InvalidTimestamp(raw.to_string()))
}
