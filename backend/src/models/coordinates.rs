//! Sky coordinate types.
//!
//! Angles are stored as `qtty::Degrees` and normalized on construction:
//! longitudes (RA, azimuth, galactic l) into `[0, 360)`, latitudes as given.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::astro::angles::normalize_deg;

/// Equatorial coordinates (right ascension / declination).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    /// Right ascension, `[0, 360)`
    pub ra: Degrees,
    /// Declination, `[-90, 90]`
    pub dec: Degrees,
}

impl EquatorialCoord {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            ra: Degrees::new(normalize_deg(ra_deg)),
            dec: Degrees::new(dec_deg),
        }
    }
}

/// Local horizontal coordinates.
///
/// Azimuth is measured from true north, increasing eastward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    /// Altitude above the horizon, `[-90, 90]`
    pub alt: Degrees,
    /// Azimuth from north through east, `[0, 360)`
    pub az: Degrees,
}

impl HorizontalCoord {
    pub fn new(alt_deg: f64, az_deg: f64) -> Self {
        Self {
            alt: Degrees::new(alt_deg),
            az: Degrees::new(normalize_deg(az_deg)),
        }
    }
}

/// Galactic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticCoord {
    /// Galactic longitude, `[0, 360)`
    pub l: Degrees,
    /// Galactic latitude, `[-90, 90]`
    pub b: Degrees,
}

impl GalacticCoord {
    pub fn new(l_deg: f64, b_deg: f64) -> Self {
        Self {
            l: Degrees::new(normalize_deg(l_deg)),
            b: Degrees::new(b_deg),
        }
    }
}

/// Cartesian direction on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UnitVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
