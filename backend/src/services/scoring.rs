//! Composite suitability score and the go/no-go verdict.

use crate::astro::angles::{angular_distance_deg, clamp01, mid_azimuth_deg};
use crate::config::Thresholds;
use crate::models::{Observation, ScoreBreakdown, ScoreResult};

const SUN_WEIGHT: f64 = 0.4;
const MOON_WEIGHT: f64 = 0.4;
const PLANE_WEIGHT: f64 = 0.2;

/// Scores observations against one set of thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SuitabilityScorer {
    thresholds: Thresholds,
}

impl SuitabilityScorer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Score plus verdict for an observation.
    ///
    /// `pillars` are the galactic plane horizon crossings; the moon/pillar
    /// adjustment only applies when exactly two are given.
    pub fn score(&self, observation: &Observation, pillars: &[f64]) -> ScoreResult {
        self.breakdown(observation, pillars).result
    }

    /// Full per-factor breakdown of [`score`](Self::score).
    pub fn breakdown(&self, observation: &Observation, pillars: &[f64]) -> ScoreBreakdown {
        let t = &self.thresholds;

        let sun_rating = linear_rating(observation.sun_alt_deg, t.sun_alt_max, t.sun_tolerance);
        let moon_rating = linear_rating(observation.moon_alt_deg, t.moon_alt_max, t.moon_tolerance);
        let plane_rating =
            linear_rating(observation.plane_dist_deg, t.plane_dist_max, t.plane_tolerance);

        let base_score = 100.0
            * (SUN_WEIGHT * sun_rating + MOON_WEIGHT * moon_rating + PLANE_WEIGHT * plane_rating);

        let cloud_rating = observation
            .cloud_pct
            .filter(|pct| pct.is_finite())
            .map(|pct| clamp01(pct / t.cloud_good_at));
        let cloud_bonus = cloud_rating.map_or(0.0, |rating| t.cloud_bonus_max * rating);

        let before_pillars = clamp_score(base_score + cloud_bonus);
        let pillar_adjustment = self.pillar_adjustment(observation.moon_az_deg, pillars);
        let score = clamp_score(before_pillars + pillar_adjustment);

        ScoreBreakdown {
            sun_rating,
            moon_rating,
            plane_rating,
            cloud_rating,
            base_score,
            cloud_bonus,
            pillar_adjustment,
            result: ScoreResult {
                score,
                go: self.is_go(observation),
            },
        }
    }

    /// Hard verdict; ignores cloud cover and the pillar rule.
    pub fn is_go(&self, observation: &Observation) -> bool {
        self.thresholds.is_go(
            observation.sun_alt_deg,
            observation.moon_alt_deg,
            observation.plane_dist_deg,
        )
    }

    /// Bonus when the moon sits near the centre between the two pillars,
    /// penalty when it is far from it, zero otherwise.
    pub fn pillar_adjustment(&self, moon_az_deg: f64, pillars: &[f64]) -> f64 {
        let [first, second] = pillars else {
            return 0.0;
        };
        if !moon_az_deg.is_finite() {
            return 0.0;
        }

        let t = &self.thresholds;
        let centre = mid_azimuth_deg(*first, *second);
        let dist = angular_distance_deg(moon_az_deg, centre);

        if dist <= t.pillar_centre_tolerance {
            t.pillar_bonus
        } else if dist >= 2.0 * t.pillar_centre_tolerance {
            -t.pillar_penalty
        } else {
            0.0
        }
    }
}

/// Centre azimuth between two pillars, `None` unless exactly two are given.
pub fn pillar_centre_deg(pillars: &[f64]) -> Option<f64> {
    match pillars {
        [first, second] => Some(mid_azimuth_deg(*first, *second)),
        _ => None,
    }
}

/// 1 at or below the ceiling, falling linearly to 0 at `ceiling + tolerance`.
fn linear_rating(value: f64, ceiling: f64, tolerance: f64) -> f64 {
    clamp01((ceiling + tolerance - value) / tolerance)
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
