//! # Latency — Rounded Responder Duration
//!
//! Elapsed responder time in seconds, rounded half away from zero to four
//! fractional digits. The table column `Latency_Seconds` is always written
//! with exactly four fractional digits (`0.0012`), and parsing re-applies
//! the rounding so a stored value round-trips to the same `Latency`.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GraphGuardError;

/// Decimal places kept by every latency.
pub const LATENCY_DECIMALS: usize = 4;

const SCALE: f64 = 10_000.0;

/// A non-negative, finite duration in seconds with at most four decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latency(f64);

impl Latency {
    /// Zero elapsed time.
    pub const ZERO: Latency = Latency(0.0);

    /// Build a latency from a measured `Duration`.
    pub fn from_duration(elapsed: Duration) -> Self {
        Self(round4(elapsed.as_secs_f64()))
    }

    /// Build a latency from seconds, rounding to four decimals.
    ///
    /// # Errors
    ///
    /// Rejects negative, NaN, and infinite values.
    pub fn from_secs_f64(secs: f64) -> Result<Self, GraphGuardError> {
        if !secs.is_finite() {
            return Err(GraphGuardError::InvalidLatency(format!(
                "latency must be finite, got {secs}"
            )));
        }
        if secs < 0.0 {
            return Err(GraphGuardError::InvalidLatency(format!(
                "latency must not be negative, got {secs}"
            )));
        }
        Ok(Self(round4(secs)))
    }

    /// Seconds as a floating-point value.
    pub fn as_secs_f64(&self) -> f64 {
        self.0
    }

    /// Render with exactly four fractional digits, as stored in the table.
    pub fn to_table_string(&self) -> String {
        format!("{:.*}", LATENCY_DECIMALS, self.0)
    }
}

fn round4(secs: f64) -> f64 {
    // -0.0 would render as "-0.0000".
    ((secs * SCALE).round() / SCALE).abs()
}

impl std::fmt::Display for Latency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_table_string())
    }
}

impl FromStr for Latency {
    type Err = GraphGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs: f64 = s
            .trim()
            .parse()
            .map_err(|_| GraphGuardError::InvalidLatency(format!("not a number: {s:?}")))?;
        Self::from_secs_f64(secs)
    }
}

impl TryFrom<f64> for Latency {
    type Error = GraphGuardError;

    fn try_from(secs: f64) -> Result<Self, Self::Error> {
        Self::from_secs_f64(secs)
    }
}

impl From<Latency> for f64 {
    fn from(latency: Latency) -> Self {
        latency.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_duration_rounds_to_four_places() {
        let l = Latency::from_duration(Duration::from_micros(123_456));
        assert_eq!(l.as_secs_f64(), 0.1235);
        assert_eq!(l.to_table_string(), "0.1235");
    }

    #[test]
    fn test_sub_tenth_millisecond_rounds_to_zero() {
        let l = Latency::from_duration(Duration::from_nanos(20_000));
        assert_eq!(l, Latency::ZERO);
        assert_eq!(l.to_table_string(), "0.0000");
    }

    #[test]
    fn test_negative_rejected() {
        assert!(Latency::from_secs_f64(-0.5).is_err());
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        let l = Latency::from_secs_f64(-0.0).unwrap();
        assert_eq!(l.to_table_string(), "0.0000");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Latency::from_secs_f64(f64::NAN).is_err());
        assert!(Latency::from_secs_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_table_string() {
        let l: Latency = "0.2000".parse().unwrap();
        assert_eq!(l.as_secs_f64(), 0.2);
        let short: Latency = "0.0".parse().unwrap();
        assert_eq!(short, Latency::ZERO);
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!("fast".parse::<Latency>().is_err());
        assert!("".parse::<Latency>().is_err());
        assert!("-1".parse::<Latency>().is_err());
    }

    #[test]
    fn test_serde_as_number() {
        let l = Latency::from_secs_f64(0.25).unwrap();
        assert_eq!(serde_json::to_string(&l).unwrap(), "0.25");
        let back: Latency = serde_json::from_str("0.25").unwrap();
        assert_eq!(back, l);
        assert!(serde_json::from_str::<Latency>("-3.0").is_err());
    }
}
