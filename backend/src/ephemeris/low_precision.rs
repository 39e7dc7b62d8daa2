//! Low-accuracy analytic sun and moon positions.
//!
//! Sun: mean anomaly plus a three-term equation of centre.
//! Moon: mean longitude with the leading periodic terms for longitude,
//! latitude and distance. Geocentric, no refraction, no parallax. Errors are
//! a fraction of a degree for the Sun and around a degree for the Moon,
//! well inside the tolerance bands used for scoring.

use std::f64::consts::PI;

use crate::error::RaybatsResult;
use crate::models::{Instant, JulianDate};

use super::{EphemerisProvider, MoonPosition, SunPosition};

const RAD: f64 = PI / 180.0;

/// Obliquity of the ecliptic at J2000.
const OBLIQUITY: f64 = RAD * 23.4397;

/// Built-in provider; needs no data files or network.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecisionEphemeris;

impl LowPrecisionEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for LowPrecisionEphemeris {
    fn sun_position(
        &self,
        instant: Instant,
        lat_deg: f64,
        lon_deg: f64,
    ) -> RaybatsResult<SunPosition> {
        let d = to_days(instant);
        let lw = RAD * -lon_deg;
        let phi = RAD * lat_deg;

        let c = sun_coords(d);
        let h = sidereal_time(d, lw) - c.ra;

        Ok(SunPosition {
            altitude: altitude(h, phi, c.dec),
            azimuth: azimuth(h, phi, c.dec),
        })
    }

    fn moon_position(
        &self,
        instant: Instant,
        lat_deg: f64,
        lon_deg: f64,
    ) -> RaybatsResult<MoonPosition> {
        let d = to_days(instant);
        let lw = RAD * -lon_deg;
        let phi = RAD * lat_deg;

        let c = moon_coords(d);
        let h = sidereal_time(d, lw) - c.ra;

        Ok(MoonPosition {
            altitude: altitude(h, phi, c.dec),
            azimuth: azimuth(h, phi, c.dec),
            distance_km: c.dist_km,
        })
    }

    fn name(&self) -> &str {
        "low-precision"
    }
}

struct EquatorialPoint {
    ra: f64,
    dec: f64,
    dist_km: f64,
}

fn to_days(instant: Instant) -> f64 {
    JulianDate::from_datetime(instant).days_since_j2000()
}

fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin())
        .clamp(-1.0, 1.0)
        .asin()
}

/// Azimuth from south, positive westward.
fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos())
        .clamp(-1.0, 1.0)
        .asin()
}

fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * d) - lw
}

fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

fn ecliptic_longitude(m: f64) -> f64 {
    // equation of centre
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    // perihelion of the Earth
    let p = RAD * 102.9372;
    m + c + p + PI
}

fn sun_coords(d: f64) -> EquatorialPoint {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    EquatorialPoint {
        ra: right_ascension(l, 0.0),
        dec: declination(l, 0.0),
        dist_km: 149_597_870.7,
    }
}

fn moon_coords(d: f64) -> EquatorialPoint {
    // mean ecliptic longitude, mean anomaly, mean distance from node
    let l0 = RAD * (218.316 + 13.176_396 * d);
    let m = RAD * (134.963 + 13.064_993 * d);
    let f = RAD * (93.272 + 13.229_350 * d);

    let l = l0 + RAD * 6.289 * m.sin();
    let b = RAD * 5.128 * f.sin();
    let dist_km = 385_001.0 - 20_905.0 * m.cos();

    EquatorialPoint {
        ra: right_ascension(l, b),
        dec: declination(l, b),
        dist_km,
    }
}
