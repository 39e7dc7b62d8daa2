//! Julian Date and sidereal time.
//!
//! Low-accuracy linear GMST expression; good to a fraction of a degree over
//! decades around J2000, which is ample for horizon-scale geometry.

use crate::models::{Instant, JulianDate};

use super::angles::normalize_deg;

/// GMST at J2000.0, in degrees.
pub const GMST_AT_J2000_DEG: f64 = 280.460_618_37;

/// Sidereal rotation rate, degrees per day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Julian Date of an instant: `ms / 86_400_000 + 2_440_587.5`.
pub fn julian_date(instant: Instant) -> f64 {
    JulianDate::from_datetime(instant).value()
}

/// Days elapsed since J2000.0.
pub fn days_since_j2000(instant: Instant) -> f64 {
    JulianDate::from_datetime(instant).days_since_j2000()
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
pub fn greenwich_sidereal_time_deg(instant: Instant) -> f64 {
    normalize_deg(GMST_AT_J2000_DEG + SIDEREAL_RATE_DEG_PER_DAY * days_since_j2000(instant))
}

/// Local sidereal time in degrees for an east-positive longitude, `[0, 360)`.
pub fn local_sidereal_time_deg(instant: Instant, lon_deg: f64) -> f64 {
    normalize_deg(greenwich_sidereal_time_deg(instant) + lon_deg)
}
