// Date utility functions
// Calendar arithmetic and timestamp parsing shared by the grid and the models

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{GridError, GridResult};

/// Wall-clock formats accepted for event timestamps, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days in the given month, or `None` if the month is invalid.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Parse an event timestamp into a wall-clock date-time.
///
/// Accepts RFC 3339 (the offset is dropped and the local wall-clock time kept,
/// since the engine does no timezone conversion), ISO-8601 date-times with a
/// `T` or space separator, and bare `YYYY-MM-DD` dates (midnight).
pub fn parse_timestamp(input: &str) -> GridResult<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GridError::InvalidDate("empty timestamp".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| GridError::InvalidDate(format!("unrecognized timestamp '{}'", trimmed)))
}

/// Parse a calendar date, accepting anything [`parse_timestamp`] accepts.
pub fn parse_date(input: &str) -> GridResult<NaiveDate> {
    parse_timestamp(input).map(|dt| dt.date())
}
