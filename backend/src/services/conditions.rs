//! One full evaluation for an observer: observation, score, pillars, next
//! window and summary.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::astro::SkyGeometryModel;
use crate::config::{RaybatsConfig, SearchSettings, Thresholds};
use crate::ephemeris::{EphemerisProvider, LowPrecisionEphemeris};
use crate::error::RaybatsResult;
use crate::models::{GoWindow, Instant, Observation, Observer, ScoreBreakdown};

use super::cloud_cover::{CloudCoverSource, NoCloudCover, OpenMeteoClient};
use super::go_window::find_next_go_window;
use super::observation::ObservationAdapter;
use super::scoring::{pillar_centre_deg, SuitabilityScorer};
use super::summary::{status_label, summary_text};

/// Everything computed for one observer at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsReport {
    pub observer: Observer,
    pub evaluated_at: Instant,
    pub observation: Observation,
    pub breakdown: ScoreBreakdown,
    /// Score in `[0, 100]`
    pub score: f64,
    pub go: bool,
    /// `GO` or `NO GO`
    pub status: String,
    /// Galactic plane horizon crossings; empty or two azimuths
    pub pillars: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar_centre_az_deg: Option<f64>,
    pub next_window: GoWindow,
    pub summary: String,
}

/// Orchestrates evaluations with fixed thresholds and collaborators.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Clone)]
pub struct ConditionsService {
    adapter: ObservationAdapter,
    scorer: SuitabilityScorer,
    search: SearchSettings,
    cloud: Arc<dyn CloudCoverSource>,
}

impl fmt::Debug for ConditionsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionsService")
            .field("adapter", &self.adapter)
            .field("scorer", &self.scorer)
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

impl ConditionsService {
    pub fn new(
        adapter: ObservationAdapter,
        thresholds: Thresholds,
        search: SearchSettings,
        cloud: Arc<dyn CloudCoverSource>,
    ) -> Self {
        Self {
            adapter,
            scorer: SuitabilityScorer::new(thresholds),
            search,
            cloud,
        }
    }

    /// Build the service described by a configuration, with the built-in
    /// ephemeris.
    pub fn from_config(config: &RaybatsConfig) -> RaybatsResult<Self> {
        Self::from_config_with(config, Arc::new(LowPrecisionEphemeris::new()))
    }

    /// Same as [`from_config`](Self::from_config) with a caller-supplied
    /// ephemeris provider.
    pub fn from_config_with(
        config: &RaybatsConfig,
        ephemeris: Arc<dyn EphemerisProvider>,
    ) -> RaybatsResult<Self> {
        config.validate()?;

        let cloud: Arc<dyn CloudCoverSource> = if config.cloud.enabled {
            Arc::new(OpenMeteoClient::new(&config.cloud)?)
        } else {
            Arc::new(NoCloudCover)
        };

        log::info!(
            "Conditions service using {} ephemeris, cloud lookups {}",
            ephemeris.name(),
            if config.cloud.enabled { "enabled" } else { "disabled" }
        );

        Ok(Self::new(
            ObservationAdapter::new(ephemeris, SkyGeometryModel::new(config.geometry)),
            config.thresholds,
            config.search,
            cloud,
        ))
    }

    pub fn thresholds(&self) -> &Thresholds {
        self.scorer.thresholds()
    }

    pub fn search_settings(&self) -> &SearchSettings {
        &self.search
    }

    pub fn adapter(&self) -> &ObservationAdapter {
        &self.adapter
    }

    /// Evaluate conditions at `now`.
    ///
    /// Fails only when the ephemeris is unavailable or unusable; missing
    /// cloud data and degenerate pillar geometry are carried in the report.
    pub async fn evaluate(
        &self,
        observer: &Observer,
        now: Instant,
    ) -> RaybatsResult<ConditionsReport> {
        let cloud_pct = self.cloud_cover_pct(observer).await;
        self.evaluate_with_cloud(observer, now, cloud_pct)
    }

    /// Current cloud cover from the configured source, if it has a value.
    pub async fn cloud_cover_pct(&self, observer: &Observer) -> Option<f64> {
        self.cloud.cloud_cover_pct(observer).await
    }

    /// Synchronous evaluation with an already known cloud value.
    pub fn evaluate_with_cloud(
        &self,
        observer: &Observer,
        now: Instant,
        cloud_pct: Option<f64>,
    ) -> RaybatsResult<ConditionsReport> {
        let observation = self.adapter.observe(observer, now, cloud_pct)?;
        let pillars = self.adapter.pillars(observer, now);
        let breakdown = self.scorer.breakdown(&observation, &pillars);
        let next_window = self.next_window(observer, now, &self.search)?;

        let summary = summary_text(
            observer,
            &observation,
            self.thresholds(),
            &next_window,
            self.search.horizon_hours,
        );

        log::debug!(
            "Evaluated ({}, {}) at {}: score {:.1}, go {}",
            observer.latitude,
            observer.longitude,
            now,
            breakdown.result.score,
            breakdown.result.go
        );

        Ok(ConditionsReport {
            observer: *observer,
            evaluated_at: now,
            observation,
            score: breakdown.result.score,
            go: breakdown.result.go,
            status: status_label(breakdown.result.go).to_string(),
            pillar_centre_az_deg: pillar_centre_deg(&pillars),
            pillars,
            next_window,
            summary,
            breakdown,
        })
    }

    /// Next go window from `now` with explicit search settings.
    pub fn next_window(
        &self,
        observer: &Observer,
        now: Instant,
        settings: &SearchSettings,
    ) -> RaybatsResult<GoWindow> {
        find_next_go_window(&self.adapter, self.thresholds(), observer, now, settings)
    }
}
