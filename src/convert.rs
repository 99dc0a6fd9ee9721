//! Standalone timestamp converter.
//!
//! Turns one user-supplied value into a UTC and a local description. All-digit
//! input is an epoch (13 or more digits are milliseconds, fewer are seconds);
//! anything else is parsed as a calendar date.

use std::fmt;

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use thiserror::Error;

use crate::epoch::{self, EpochUnit};

/// Local rendering, e.g. `Tue Nov 14 2023 22:13:20 GMT+0000 (UTC)`.
const LOCAL_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z (%Z)";

/// [`LOCAL_FORMAT`] without the trailing zone name, so local output reads back.
const ZONED_LOCAL_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Offset-less date-times, interpreted in the caller's zone.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Textual dates without a time, interpreted as local midnight.
const LOCAL_DATE_FORMATS: &[&str] = &["%b %d %Y", "%B %d, %Y", "%d %b %Y", "%Y/%m/%d"];

/// The input could not be read as an epoch or a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid date")]
pub struct InvalidInput;

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub utc: String,
    pub local: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UTC: {}", self.utc)?;
        write!(f, "Local: {}", self.local)
    }
}

/// Convert `input` to UTC and to `tz`.
pub fn convert(input: &str, tz: &TimeZone) -> Result<Conversion, InvalidInput> {
    let trimmed = input.trim();
    let ts = if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        epoch::to_timestamp(trimmed, EpochUnit::for_digit_input(trimmed.len()))
    } else {
        parse_date(trimmed, tz)
    }
    .ok_or(InvalidInput)?;

    Ok(Conversion {
        utc: epoch::format_utc(ts),
        local: ts.to_zoned(tz.clone()).strftime(LOCAL_FORMAT).to_string(),
    })
}

/// Parse a textual date.
///
/// Tries, in order: RFC 3339 with offset, RFC 2822, the converter's own
/// local rendering, ISO date-only (UTC midnight), offset-less date-times in
/// `tz`, then textual dates at local midnight.
fn parse_date(s: &str, tz: &TimeZone) -> Option<Timestamp> {
    if s.is_empty() {
        return None;
    }

    if let Ok(ts) = s.parse::<Timestamp>() {
        return Some(ts);
    }

    if let Ok(zdt) = jiff::fmt::rfc2822::parse(s) {
        return Some(zdt.timestamp());
    }

    if let Ok(ts) = Timestamp::strptime(ZONED_LOCAL_FORMAT, strip_zone_name(s)) {
        return Some(ts);
    }

    if let Ok(date) = Date::strptime("%Y-%m-%d", s)
        && let Ok(zdt) = date.to_zoned(TimeZone::UTC)
    {
        return Some(zdt.timestamp());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = DateTime::strptime(format, s)
            && let Ok(zdt) = dt.to_zoned(tz.clone())
        {
            return Some(zdt.timestamp());
        }
    }

    for format in LOCAL_DATE_FORMATS {
        if let Ok(date) = Date::strptime(format, s)
            && let Ok(zdt) = date.to_zoned(tz.clone())
        {
            return Some(zdt.timestamp());
        }
    }

    None
}

/// Drop a trailing ` (Zone Name)` suffix.
fn strip_zone_name(s: &str) -> &str {
    match s.rfind(" (") {
        Some(idx) if s.ends_with(')') => &s[..idx],
        _ => s,
    }
}
