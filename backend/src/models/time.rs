use chrono::{DateTime, Utc};
use serde::*;

/// Absolute timestamp used by every engine operation.
pub type Instant = DateTime<Utc>;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Milliseconds per day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date representation.
/// JD 0 = 4713-01-01 12:00:00 BC (proleptic Julian calendar)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(qtty::Days);

impl JulianDate {
    /// Create a new JD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Days elapsed since J2000.0 (negative before it).
    pub fn days_since_j2000(&self) -> f64 {
        self.value() - J2000_JD
    }

    /// Convert to Unix milliseconds.
    pub fn to_unix_millis(&self) -> f64 {
        (self.value() - UNIX_EPOCH_JD) * MS_PER_DAY
    }

    /// Create from Unix milliseconds.
    pub fn from_unix_millis(millis: f64) -> Self {
        Self::new(millis / MS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Convert to chrono DateTime<Utc>, rounded to whole milliseconds.
    pub fn to_datetime(&self) -> Instant {
        let millis = self.to_unix_millis().round() as i64;
        DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc> at millisecond resolution.
    pub fn from_datetime(dt: Instant) -> Self {
        Self::from_unix_millis(dt.timestamp_millis() as f64)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

impl From<Instant> for JulianDate {
    fn from(dt: Instant) -> Self {
        JulianDate::from_datetime(dt)
    }
}
