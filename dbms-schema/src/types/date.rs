use std::fmt;
use std::rc::Rc;

use candid::CandidType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Largest distance from the Unix epoch, in milliseconds, a date value may hold.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Date-time layouts without offset, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts with a numeric offset, seconds optional.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Text used for the invalid date sentinel.
const INVALID_DATE: &str = "Invalid Date";

/// A temporal value held by `date` and `datetime` column defaults.
///
/// A date value is either a UTC instant or the invalid-date sentinel, which is what a
/// malformed input degrades to instead of raising an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateValue(Option<DateTime<Utc>>);

impl DateValue {
    /// The invalid-date sentinel.
    pub const INVALID: DateValue = DateValue(None);

    /// Parses a date from text.
    ///
    /// Accepted layouts are RFC 3339, `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    /// `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` followed by `Z`, by `±HH:MM` or by nothing
    /// (read as UTC), and RFC 2822.
    /// Anything else yields [`DateValue::INVALID`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Self(Some(instant.with_timezone(&Utc)));
        }
        if let Some(instant) = OFFSET_DATETIME_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(text, format).ok())
        {
            return Self(Some(instant.with_timezone(&Utc)));
        }
        if let Some(naive) = text
            .strip_suffix(['Z', 'z'])
            .and_then(parse_naive_datetime)
        {
            return Self(Some(naive.and_utc()));
        }
        if let Some(date) = parse_calendar_date(text) {
            return Self(date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()));
        }
        if let Some(naive) = parse_naive_datetime(text) {
            return Self(Some(naive.and_utc()));
        }
        if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
            return Self(Some(instant.with_timezone(&Utc)));
        }

        Self::INVALID
    }

    /// Builds a date from milliseconds elapsed since the Unix epoch.
    ///
    /// The fractional part is truncated. Non finite input, or input farther than
    /// 8.64e15 ms from the epoch, yields [`DateValue::INVALID`].
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
            return Self::INVALID;
        }
        Self(DateTime::from_timestamp_millis(millis.trunc() as i64))
    }

    /// Returns whether this is a real instant rather than the sentinel.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the instant, if valid.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Milliseconds since the Unix epoch; `NaN` for the sentinel.
    pub fn timestamp_millis(&self) -> f64 {
        self.0
            .map_or(f64::NAN, |instant| instant.timestamp_millis() as f64)
    }
}

fn parse_naive_datetime(text: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// Parses `YYYY`, `YYYY-MM` and `YYYY-MM-DD`; missing month and day default to 1.
fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let year = parse_digits(parts.next()?, 4)?;
    let month = match parts.next() {
        Some(part) => parse_digits(part, 2)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(part) => parse_digits(part, 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn parse_digits(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(instant) => f.write_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => f.write_str(INVALID_DATE),
        }
    }
}

impl CandidType for DateValue {
    fn _ty() -> candid::types::Type {
        candid::types::Type(Rc::new(candid::types::TypeInner::Text))
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: candid::types::Serializer,
    {
        serializer.serialize_text(&self.to_string())
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(DateValue::parse(&text))
    }
}
