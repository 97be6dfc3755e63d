//! Log formatter: one device record → one display line.
//!
//! The device timestamp encoding is not consistent across firmware builds, so
//! the interpretation is an explicit [`TimePolicy`] instead of a guess.

use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::models::word::display_word;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Rendering of the timestamp inside the brackets.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Zone-less layouts accepted from the device (fraction optional).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Zoned layouts not covered by RFC 3339 (space separator, `+0900`).
const ZONED_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"];

/// Policy name as it appears in the config file and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimePolicyKind {
    #[default]
    UtcToLocal,
    AsLocal,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePolicy {
    /// Device sends UTC; show it in the local zone. Zone-less stamps are UTC.
    UtcToLocal,
    /// Device already sends local wall-clock time; show it untouched.
    AsLocal,
    /// Render everything in one fixed offset. Zone-less stamps are UTC.
    Fixed(FixedOffset),
}

/// A parsed device timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTime {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl TimePolicy {
    /// Render a parsed timestamp as `YYYY-MM-DD HH:MM:SS` under this policy.
    pub fn render(&self, t: &DeviceTime) -> String {
        match (self, t) {
            (TimePolicy::UtcToLocal, DeviceTime::Zoned(dt)) => {
                dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
            }
            (TimePolicy::UtcToLocal, DeviceTime::Naive(n)) => Utc
                .from_utc_datetime(n)
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
            (TimePolicy::AsLocal, DeviceTime::Zoned(dt)) => dt.format(DISPLAY_FORMAT).to_string(),
            (TimePolicy::AsLocal, DeviceTime::Naive(n)) => n.format(DISPLAY_FORMAT).to_string(),
            (TimePolicy::Fixed(offset), DeviceTime::Zoned(dt)) => {
                dt.with_timezone(offset).format(DISPLAY_FORMAT).to_string()
            }
            (TimePolicy::Fixed(offset), DeviceTime::Naive(n)) => offset
                .from_utc_datetime(n)
                .format(DISPLAY_FORMAT)
                .to_string(),
        }
    }
}

/// Parse a UTC offset such as `+09:00`, `-0530`, `+02`, `Z` or `UTC`.
pub fn parse_offset(raw: &str) -> AppResult<FixedOffset> {
    let s = raw.trim();
    let invalid = || AppError::InvalidOffset(raw.to_string());

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let (hh, mm) = match digits.len() {
        2 => (&digits[..2], "0"),
        4 => (&digits[..2], &digits[2..]),
        _ => return Err(invalid()),
    };

    let hours: i32 = hh.parse().map_err(|_| invalid())?;
    let minutes: i32 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parse a raw device timestamp. A bare date is taken as UTC midnight.
pub fn parse_device_time(raw: &str) -> Option<DeviceTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(DeviceTime::Zoned(dt));
    }

    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(DeviceTime::Zoned(dt));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(n) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DeviceTime::Naive(n));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| DeviceTime::Zoned(Utc.from_utc_datetime(&n).fixed_offset()))
}

/// Format one record as `[YYYY-MM-DD HH:MM:SS] <display word>`.
pub fn try_format_line(record: &EventRecord, policy: &TimePolicy) -> AppResult<String> {
    let word = record.word().ok_or(AppError::MissingField("word"))?;
    let raw = record.time().ok_or(AppError::MissingField("time"))?;
    let time =
        parse_device_time(raw).ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))?;

    Ok(format!("[{}] {}", policy.render(&time), display_word(word)))
}

/// Like [`try_format_line`] but returns an empty string for records that
/// cannot be shown. The reason goes to the diagnostic log only.
pub fn format_line(record: &EventRecord, policy: &TimePolicy) -> String {
    match try_format_line(record, policy) {
        Ok(line) => line,
        Err(e) => {
            log::warn!("dropping log record {record:?}: {e}");
            String::new()
        }
    }
}
