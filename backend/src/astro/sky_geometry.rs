//! Galactic-plane visibility model.
//!
//! Two scalar facts are derived for an observer at an instant:
//!
//! - how far the galactic plane passes from the zenith, and
//! - the pair of horizon bearings where the plane meets the horizon
//!   (the "pillars" of the Milky Way arch).

use serde::{Deserialize, Serialize};

use crate::error::{RaybatsError, RaybatsResult};
use crate::models::Instant;

use super::angles::{angle_lerp_deg, angular_distance_deg};
use super::time_frame::local_sidereal_time_deg;
use super::transforms::{
    equatorial_to_galactic, equatorial_to_horizontal_at_lst, equatorial_to_unit_vector,
    galactic_coord_to_equatorial,
};

/// Sampling parameters for the horizon-crossing search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometrySettings {
    /// Galactic longitude step between plane samples, degrees
    #[serde(default = "default_sample_step_deg")]
    pub sample_step_deg: f64,
    /// Crossing estimates closer than this are merged, degrees
    #[serde(default = "default_dedup_tolerance_deg")]
    pub dedup_tolerance_deg: f64,
}

fn default_sample_step_deg() -> f64 {
    5.0
}

fn default_dedup_tolerance_deg() -> f64 {
    6.0
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            sample_step_deg: default_sample_step_deg(),
            dedup_tolerance_deg: default_dedup_tolerance_deg(),
        }
    }
}

impl GeometrySettings {
    pub fn validate(&self) -> RaybatsResult<()> {
        if !(self.sample_step_deg > 0.0 && self.sample_step_deg <= 180.0) {
            return Err(RaybatsError::configuration(format!(
                "geometry.sample_step_deg must be in (0, 180], got {}",
                self.sample_step_deg
            )));
        }
        if !(self.dedup_tolerance_deg >= 0.0 && self.dedup_tolerance_deg < 180.0) {
            return Err(RaybatsError::configuration(format!(
                "geometry.dedup_tolerance_deg must be in [0, 180), got {}",
                self.dedup_tolerance_deg
            )));
        }
        Ok(())
    }
}

/// One sample of the galactic plane projected onto the local sky.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlaneSample {
    alt_deg: f64,
    az_deg: f64,
}

/// Galactic-plane geometry for a fixed sampling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkyGeometryModel {
    settings: GeometrySettings,
}

impl SkyGeometryModel {
    pub fn new(settings: GeometrySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GeometrySettings {
        &self.settings
    }

    /// Angular distance of the galactic plane from the zenith, `[0, 90]`.
    ///
    /// The zenith is the equatorial direction (RA = LST, Dec = latitude);
    /// its absolute galactic latitude is the distance sought.
    pub fn plane_distance_from_zenith_deg(
        &self,
        instant: Instant,
        lat_deg: f64,
        lon_deg: f64,
    ) -> f64 {
        galactic_plane_distance_from_zenith_deg(instant, lat_deg, lon_deg)
    }

    /// Azimuths where the galactic plane crosses the horizon.
    ///
    /// Returns either nothing (degenerate geometry: the plane never dips
    /// below the horizon, or sampling found a single crossing) or exactly
    /// two azimuths in ascending order.
    pub fn horizon_crossings_az(&self, instant: Instant, lat_deg: f64, lon_deg: f64) -> Vec<f64> {
        let samples = self.sample_plane(instant, lat_deg, lon_deg);
        let mut crossings = detect_crossings(&samples);

        crossings.sort_by(|a, b| a.total_cmp(b));
        let unique = dedup_crossings(&crossings, self.settings.dedup_tolerance_deg);

        match widest_pair(&unique) {
            Some((a, b)) => vec![a, b],
            None => Vec::new(),
        }
    }

    fn sample_plane(&self, instant: Instant, lat_deg: f64, lon_deg: f64) -> Vec<PlaneSample> {
        let step = self.settings.sample_step_deg;
        let lst_deg = local_sidereal_time_deg(instant, lon_deg);
        let count = (360.0 / step).ceil() as usize;

        (0..=count)
            .map(|i| {
                // the final sample closes the loop at l = 360
                let l = (i as f64 * step).min(360.0);
                let eq = galactic_coord_to_equatorial(l, 0.0);
                let h = equatorial_to_horizontal_at_lst(
                    eq.ra.value(),
                    eq.dec.value(),
                    lst_deg,
                    lat_deg,
                );
                PlaneSample {
                    alt_deg: h.alt.value(),
                    az_deg: h.az.value(),
                }
            })
            .collect()
    }
}

/// Angular distance of the galactic plane from the zenith, `[0, 90]`.
pub fn galactic_plane_distance_from_zenith_deg(
    instant: Instant,
    lat_deg: f64,
    lon_deg: f64,
) -> f64 {
    let zenith_ra = local_sidereal_time_deg(instant, lon_deg);
    let galactic = equatorial_to_galactic(equatorial_to_unit_vector(zenith_ra, lat_deg));
    let b_deg = galactic.z.clamp(-1.0, 1.0).asin().to_degrees();
    b_deg.abs()
}

/// Horizon crossings of the galactic plane with the default sampling policy.
pub fn find_galactic_plane_horizon_crossings_az(
    instant: Instant,
    lat_deg: f64,
    lon_deg: f64,
) -> Vec<f64> {
    SkyGeometryModel::default().horizon_crossings_az(instant, lat_deg, lon_deg)
}

/// Interpolated azimuths where consecutive samples straddle the horizon.
fn detect_crossings(samples: &[PlaneSample]) -> Vec<f64> {
    samples
        .windows(2)
        .filter_map(|pair| {
            let (p, q) = (pair[0], pair[1]);
            let (a1, a2) = (p.alt_deg, q.alt_deg);
            let straddles = a1 == 0.0 || (a1 > 0.0 && a2 < 0.0) || (a1 < 0.0 && a2 > 0.0);
            let denom = a1 - a2;
            if !straddles || denom.abs() < 1e-9 {
                return None;
            }
            let t = a1 / denom;
            Some(angle_lerp_deg(p.az_deg, q.az_deg, t))
        })
        .collect()
}

/// Collapse sorted estimates closer than `tolerance` to the last kept one.
fn dedup_crossings(sorted: &[f64], tolerance: f64) -> Vec<f64> {
    let mut unique: Vec<f64> = Vec::with_capacity(sorted.len());
    for &az in sorted {
        match unique.last() {
            Some(&last) if angular_distance_deg(az, last) <= tolerance => {}
            _ => unique.push(az),
        }
    }
    unique
}

/// Pair with the largest shortest-arc separation; the first found wins ties.
fn widest_pair(unique: &[f64]) -> Option<(f64, f64)> {
    if unique.len() < 2 {
        return None;
    }
    let mut best = (unique[0], unique[1]);
    let mut best_sep = angular_distance_deg(unique[0], unique[1]);

    for i in 0..unique.len() {
        for j in (i + 1)..unique.len() {
            let sep = angular_distance_deg(unique[i], unique[j]);
            if sep > best_sep {
                best_sep = sep;
                best = (unique[i], unique[j]);
            }
        }
    }
    Some(best)
}
