//! # Temporal Types — Wall-Clock Timestamps
//!
//! Defines `Timestamp`, the request time stamped on every audit record.
//! The audit table stores local wall-clock time with second precision in
//! the form `YYYY-MM-DD HH:MM:SS`, so the type carries a naive local
//! datetime truncated to whole seconds.
//!
//! Parsing is strict: anything other than the exact table format,
//! including sub-seconds or an RFC 3339 `T` separator, is rejected.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GraphGuardError;

/// Textual layout of a timestamp in the audit table.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A local wall-clock timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current local time, truncated.
/// - [`Timestamp::from_local()`] — from a `DateTime<Local>`, truncating sub-seconds.
/// - [`Timestamp::from_naive()`] — from a `NaiveDateTime`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from the `YYYY-MM-DD HH:MM:SS` table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a timestamp from the current local time, truncated to seconds.
    pub fn now() -> Self {
        Self::from_local(Local::now())
    }

    /// Create a timestamp from a local `DateTime`, truncating sub-seconds.
    pub fn from_local(dt: DateTime<Local>) -> Self {
        Self::from_naive(dt.naive_local())
    }

    /// Create a timestamp from a naive datetime, truncating sub-seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from the table format `YYYY-MM-DD HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphGuardError::InvalidTimestamp`] if the string does not
    /// match the format exactly.
    pub fn parse(s: &str) -> Result<Self, GraphGuardError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| GraphGuardError::InvalidTimestamp {
                value: s.to_string(),
            })
    }

    /// Access the inner `NaiveDateTime`.
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// Render in the table format (e.g., `2026-01-15 12:00:00`).
    pub fn to_table_string(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = GraphGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_table_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `NaiveDateTime` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_naive().nanosecond(), 0);
    }

    #[test]
    fn test_from_naive_truncates() {
        let dt = naive(12, 30, 45).with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_naive(dt);
        assert_eq!(ts.as_naive().nanosecond(), 0);
        assert_eq!(ts.to_table_string(), "2026-01-15 12:30:45");
    }

    #[test]
    fn test_display_matches_table_string() {
        let ts = Timestamp::from_naive(naive(23, 59, 59));
        assert_eq!(format!("{ts}"), ts.to_table_string());
    }

    #[test]
    fn test_parse_table_format() {
        let ts = Timestamp::parse("2026-01-15 12:00:00").unwrap();
        assert_eq!(ts, Timestamp::from_naive(naive(12, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_rfc3339() {
        assert!(Timestamp::parse("2026-01-15T12:00:00Z").is_err());
        assert!(Timestamp::parse("2026-01-15T12:00:00").is_err());
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = Timestamp::parse("yesterday").unwrap_err();
        assert_eq!(
            err,
            GraphGuardError::InvalidTimestamp {
                value: "yesterday".to_string()
            }
        );
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2026-01-15 12:00:00").unwrap();
        let later = Timestamp::parse("2026-01-15 12:00:01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_uses_table_format() {
        let ts = Timestamp::parse("2026-01-15 08:05:09").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-01-15 08:05:09\"");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_midnight_format() {
        let ts = Timestamp::from_naive(naive(0, 0, 0));
        assert_eq!(ts.to_table_string(), "2026-01-15 00:00:00");
    }
}
