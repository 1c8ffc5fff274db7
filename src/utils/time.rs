//! Time utilities: parsing HH:MM, anchoring times to a day, signed
//! duration parsing.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{AppError, AppResult};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an "HH:MM" time-of-day and anchor it to the given calendar day.
pub fn anchor_time(s: &str, day: NaiveDate) -> AppResult<NaiveDateTime> {
    let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    Ok(day.and_time(t))
}

/// Ledger time field: empty or "-" means absent, anything else must be a
/// valid "HH:MM". A malformed value is fatal for the load.
pub fn parse_time_field(s: &str, day: NaiveDate) -> AppResult<Option<NaiveDateTime>> {
    if s.is_empty() || s == "-" {
        Ok(None)
    } else {
        anchor_time(s, day).map(Some)
    }
}

pub fn parse_optional_time(input: Option<&String>, day: NaiveDate) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        anchor_time(s, day).map(Some)
    } else {
        Ok(None)
    }
}

/// Render an optional check time the way the ledger stores it: "HH:MM" or
/// the "-" placeholder.
pub fn time_field(t: Option<NaiveDateTime>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Parse a signed "HH:MM" duration, e.g. "01:30" or "-00:45".
pub fn parse_delta(s: &str) -> AppResult<Duration> {
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let (hours, minutes) = body
        .split_once(':')
        .ok_or_else(|| AppError::InvalidDelta(s.to_string()))?;
    let hours: i64 = hours
        .parse()
        .map_err(|_| AppError::InvalidDelta(s.to_string()))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| AppError::InvalidDelta(s.to_string()))?;
    Ok(Duration::minutes(sign * (hours * 60 + minutes)))
}
