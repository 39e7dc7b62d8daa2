use serde::{Deserialize, Serialize};

use super::time::Instant;

/// Inputs to scoring at one instant. Derived fresh for every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Sun altitude in degrees
    pub sun_alt_deg: f64,
    /// Moon altitude in degrees
    pub moon_alt_deg: f64,
    /// Moon azimuth in degrees from north, eastward
    pub moon_az_deg: f64,
    /// Angular distance of the galactic plane from the zenith, `[0, 90]`
    pub plane_dist_deg: f64,
    /// Cloud cover percentage, absent when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_pct: Option<f64>,
}

/// Suitability score plus the hard go/no-go verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score in `[0, 100]`
    pub score: f64,
    /// True iff sun, moon and plane distance are all at or below their ceilings
    pub go: bool,
}

/// Per-factor view of a score, one entry per contributing term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sun_rating: f64,
    pub moon_rating: f64,
    pub plane_rating: f64,
    /// Absent when no cloud data was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_rating: Option<f64>,
    /// Weighted score before any bonus or penalty
    pub base_score: f64,
    pub cloud_bonus: f64,
    /// Signed moon/pillar adjustment actually applied (0 when skipped)
    pub pillar_adjustment: f64,
    pub result: ScoreResult,
}

/// Next contiguous interval meeting the go verdict.
///
/// Both ends absent means no interval was found within the search horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoWindow {
    pub start: Option<Instant>,
    pub finish: Option<Instant>,
}

impl GoWindow {
    pub const fn none() -> Self {
        Self {
            start: None,
            finish: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.start.is_some() && self.finish.is_some()
    }

    /// Length of the window when both ends are known.
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start, self.finish) {
            (Some(start), Some(finish)) => Some(finish - start),
            _ => None,
        }
    }
}
