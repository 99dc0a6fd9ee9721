//! Epoch timestamp interpretation shared by the annotator and the converter.
//!
//! Numeric epochs are disambiguated by digit count, not magnitude: a token
//! of exactly 13 digits is milliseconds, 10 to 12 digits is seconds. The
//! standalone converter applies the same rule with an open upper bound
//! (13 or more digits is milliseconds).

use std::fmt;

use jiff::Timestamp;
use jiff::tz::{Offset, TimeZone};

use crate::error::SiftError;

/// Format used for the UTC representation, e.g. `Tue, 14 Nov 2023 22:13:20 GMT`.
const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `en-IN` style local representation, e.g. `15/11/2023, 3:43:20 am`.
const LOCAL_FORMAT: &str = "%d/%m/%Y, %-I:%M:%S %P";

/// Seconds east of UTC for the default local zone (IST, +05:30).
const DEFAULT_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Unit a run of digits is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochUnit {
    Seconds,
    Milliseconds,
}

impl EpochUnit {
    /// Unit for a digit run found inside a log line.
    ///
    /// Only 10 to 13 digit runs are timestamps; everything else is `None`.
    pub const fn for_token(len: usize) -> Option<Self> {
        match len {
            13 => Some(Self::Milliseconds),
            10..=12 => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Unit for an all-digit value typed into the converter.
    pub const fn for_digit_input(len: usize) -> Self {
        if len >= 13 {
            Self::Milliseconds
        } else {
            Self::Seconds
        }
    }
}

/// Interpret a string of ASCII digits as an instant.
///
/// Returns `None` when the number overflows `i64` or the instant falls
/// outside jiff's range (years -9999 through 9999). Twelve-digit second
/// values from `253402300800` upward therefore get no instant, although
/// browser `Date` handles them (year 10000 onward).
pub fn to_timestamp(digits: &str, unit: EpochUnit) -> Option<Timestamp> {
    let value: i64 = digits.parse().ok()?;
    match unit {
        EpochUnit::Seconds => Timestamp::from_second(value).ok(),
        EpochUnit::Milliseconds => Timestamp::from_millisecond(value).ok(),
    }
}

/// Format an instant the way HTTP dates are written: `Tue, 14 Nov 2023 22:13:20 GMT`.
pub fn format_utc(ts: Timestamp) -> String {
    ts.to_zoned(TimeZone::UTC).strftime(UTC_FORMAT).to_string()
}

/// The fixed-offset zone used for the second, "local" representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalZone {
    /// Short label shown next to the local time (e.g. `IST`).
    pub label: String,
    /// Fixed offset from UTC; no daylight-saving transitions are applied.
    pub offset: Offset,
}

impl Default for LocalZone {
    fn default() -> Self {
        Self {
            label: "IST".to_string(),
            offset: Offset::from_seconds(DEFAULT_OFFSET_SECONDS).unwrap_or(Offset::UTC),
        }
    }
}

impl LocalZone {
    /// Build a zone from a label and an offset string such as `+05:30`.
    pub fn new(label: impl Into<String>, offset: &str) -> Result<Self, SiftError> {
        Ok(Self {
            label: label.into(),
            offset: parse_offset(offset)?,
        })
    }

    /// Format an instant in this zone, `en-IN` style.
    pub fn format(&self, ts: Timestamp) -> String {
        ts.to_zoned(TimeZone::fixed(self.offset))
            .strftime(LOCAL_FORMAT)
            .to_string()
    }
}

/// Parse `Z`, `UTC`, `±HH`, `±HHMM` or `±HH:MM` into an [`Offset`].
pub fn parse_offset(s: &str) -> Result<Offset, SiftError> {
    let invalid = || SiftError::Config(format!("invalid UTC offset '{s}': expected ±HH:MM"));

    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Offset::UTC);
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        2 => (&digits[..2], "0"),
        4 => (&digits[..2], &digits[2..]),
        _ => return Err(invalid()),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    Offset::from_seconds(sign * (hours * 3600 + minutes * 60)).map_err(|_| invalid())
}

/// UTC and local descriptions of a single instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub utc: String,
    pub local: String,
}

impl Description {
    /// Describe an instant in UTC and in `zone`.
    pub fn of(ts: Timestamp, zone: &LocalZone) -> Self {
        Self {
            utc: format_utc(ts),
            local: zone.format(ts),
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC: {} | Local: {}", self.utc, self.local)
    }
}
