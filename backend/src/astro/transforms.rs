//! Coordinate transforms between the equatorial, galactic and local
//! horizontal frames.
//!
//! The equatorial/galactic pair shares one rotation matrix: the galactic
//! direction is `M · v` and the inverse is `Mᵀ · v`. Keeping a single
//! constant guarantees that round trips agree to numerical precision.

use crate::models::{EquatorialCoord, GalacticCoord, HorizontalCoord, Instant, UnitVector};

use super::angles::{clamp_unit, normalize_deg};
use super::time_frame::local_sidereal_time_deg;

/// J2000 equatorial → galactic rotation.
pub const EQUATORIAL_TO_GALACTIC: [[f64; 3]; 3] = [
    [-0.054_875_560_4, -0.873_437_090_2, -0.483_835_015_5],
    [0.494_109_427_9, -0.444_829_629_9, 0.746_982_244_5],
    [-0.867_666_149_0, -0.198_076_373_4, 0.455_983_776_2],
];

/// Unit vector for an equatorial direction.
pub fn equatorial_to_unit_vector(ra_deg: f64, dec_deg: f64) -> UnitVector {
    spherical_to_unit_vector(ra_deg, dec_deg)
}

/// Equatorial direction of a unit vector; RA in `[0, 360)`.
pub fn unit_vector_to_equatorial(v: UnitVector) -> EquatorialCoord {
    let (lon, lat) = unit_vector_to_spherical(v);
    EquatorialCoord::new(lon, lat)
}

/// Unit vector for a galactic direction.
pub fn galactic_to_unit_vector(l_deg: f64, b_deg: f64) -> UnitVector {
    spherical_to_unit_vector(l_deg, b_deg)
}

/// Galactic direction of a unit vector; l in `[0, 360)`.
pub fn unit_vector_to_galactic(v: UnitVector) -> GalacticCoord {
    let (lon, lat) = unit_vector_to_spherical(v);
    GalacticCoord::new(lon, lat)
}

/// Rotate an equatorial unit vector into the galactic frame.
pub fn equatorial_to_galactic(v: UnitVector) -> UnitVector {
    let m = &EQUATORIAL_TO_GALACTIC;
    UnitVector::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

/// Rotate a galactic unit vector back into the equatorial frame (transpose).
pub fn galactic_to_equatorial(v: UnitVector) -> UnitVector {
    let m = &EQUATORIAL_TO_GALACTIC;
    UnitVector::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
    )
}

/// Galactic (l, b) → equatorial (RA, Dec).
pub fn galactic_coord_to_equatorial(l_deg: f64, b_deg: f64) -> EquatorialCoord {
    unit_vector_to_equatorial(galactic_to_equatorial(galactic_to_unit_vector(l_deg, b_deg)))
}

/// Equatorial (RA, Dec) → galactic (l, b).
pub fn equatorial_coord_to_galactic(ra_deg: f64, dec_deg: f64) -> GalacticCoord {
    unit_vector_to_galactic(equatorial_to_galactic(equatorial_to_unit_vector(ra_deg, dec_deg)))
}

/// Altitude/azimuth of an equatorial direction for an observer at an instant.
///
/// Works on local west/north/up components of the direction, so azimuth
/// comes straight out of `atan2` measured from north toward east.
pub fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    instant: Instant,
    lat_deg: f64,
    lon_deg: f64,
) -> HorizontalCoord {
    let lst_deg = local_sidereal_time_deg(instant, lon_deg);
    equatorial_to_horizontal_at_lst(ra_deg, dec_deg, lst_deg, lat_deg)
}

/// Same as [`equatorial_to_horizontal`] with the local sidereal time given.
///
/// Lets callers transforming many points at one instant compute LST once.
pub fn equatorial_to_horizontal_at_lst(
    ra_deg: f64,
    dec_deg: f64,
    lst_deg: f64,
    lat_deg: f64,
) -> HorizontalCoord {
    let lat = lat_deg.to_radians();
    let dec = dec_deg.to_radians();
    let hour_angle = normalize_deg(lst_deg - ra_deg).to_radians();

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_h, cos_h) = hour_angle.sin_cos();

    let west = cos_dec * sin_h;
    let north = sin_dec * cos_lat - cos_dec * cos_h * sin_lat;
    let up = sin_dec * sin_lat + cos_dec * cos_h * cos_lat;

    let alt = clamp_unit(up).asin().to_degrees();
    let az = (-west).atan2(north).to_degrees();

    HorizontalCoord::new(alt, az)
}

/// Galactic (l, b) → local horizontal coordinates.
pub fn galactic_to_horizontal(
    l_deg: f64,
    b_deg: f64,
    instant: Instant,
    lat_deg: f64,
    lon_deg: f64,
) -> HorizontalCoord {
    let eq = galactic_coord_to_equatorial(l_deg, b_deg);
    equatorial_to_horizontal(eq.ra.value(), eq.dec.value(), instant, lat_deg, lon_deg)
}

fn spherical_to_unit_vector(lon_deg: f64, lat_deg: f64) -> UnitVector {
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    UnitVector::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

fn unit_vector_to_spherical(v: UnitVector) -> (f64, f64) {
    let lon = v.y.atan2(v.x).to_degrees();
    let lat = clamp_unit(v.z).asin().to_degrees();
    (normalize_deg(lon), lat)
}
