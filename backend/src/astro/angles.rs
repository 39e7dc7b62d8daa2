//! Angular helpers shared by the geometry and scoring code.
//!
//! All functions work in degrees. "Shortest arc" means the difference is
//! taken around the circle, never by raw subtraction.

/// Reduce an angle into `[0, 360)`.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Signed shortest-arc difference `to - from`, in `(-180, 180]`.
#[inline]
pub fn signed_delta_deg(from: f64, to: f64) -> f64 {
    let d = normalize_deg(to - from);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Unsigned shortest-arc distance between two bearings, `[0, 180]`.
#[inline]
pub fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let d = normalize_deg(a - b);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Interpolate from `a` toward `b` along the shortest arc; `t = 0` gives `a`.
#[inline]
pub fn angle_lerp_deg(a: f64, b: f64, t: f64) -> f64 {
    normalize_deg(a + signed_delta_deg(a, b) * t)
}

/// Bisect the shortest arc from `a1` toward `a2`.
///
/// For an exact 180° split both bisectors are equally valid; this returns
/// `a1 + 90`.
#[inline]
pub fn mid_azimuth_deg(a1: f64, a2: f64) -> f64 {
    angle_lerp_deg(a1, a2, 0.5)
}

/// Clamp into `[-1, 1]` before `asin`/`acos` to absorb rounding overshoot.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Clamp into `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deg() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(360.0), 0.0);
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-12);
        let tiny = normalize_deg(-1e-18);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert!((angular_distance_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert_eq!(angular_distance_deg(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_angle_lerp_takes_short_way() {
        // 350 -> 10 passes through 0, not through 180
        assert!((angle_lerp_deg(350.0, 10.0, 0.5) - 0.0).abs() < 1e-12);
        assert!((angle_lerp_deg(350.0, 10.0, 0.25) - 355.0).abs() < 1e-12);
        assert!((angle_lerp_deg(10.0, 350.0, 0.25) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_mid_azimuth() {
        assert!((mid_azimuth_deg(80.0, 120.0) - 100.0).abs() < 1e-12);
        assert!((mid_azimuth_deg(300.0, 40.0) - 350.0).abs() < 1e-12);
        // antipodal pair resolves forward from the first azimuth
        assert!((mid_azimuth_deg(0.0, 180.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_unit(1.0000000002), 1.0);
        assert_eq!(clamp_unit(-1.5), -1.0);
        assert_eq!(clamp01(-0.1), 0.0);
        assert_eq!(clamp01(0.4), 0.4);
        assert_eq!(clamp01(3.0), 1.0);
    }
}
