//! End-to-end evaluations through the conditions service.

mod support;

use std::sync::Arc;

use chrono::Duration;
use raybats::astro::angles::{angular_distance_deg, mid_azimuth_deg};
use raybats::astro::SkyGeometryModel;
use raybats::ephemeris::{EphemerisProvider, MoonPosition, SunPosition};
use raybats::models::{Instant, Observer};
use raybats::services::{
    scan_for_window, ConditionsService, FixedCloudCover, NoCloudCover, ObservationAdapter,
};
use raybats::{GoWindow, RaybatsError, RaybatsResult, SearchSettings, Thresholds};
use support::reference_instant;

/// Provider with fixed altitudes, for pinning the verdict.
struct StaticSky {
    sun_alt_deg: f64,
    moon_alt_deg: f64,
    moon_az_sw_deg: f64,
}

impl EphemerisProvider for StaticSky {
    fn sun_position(&self, _: Instant, _: f64, _: f64) -> RaybatsResult<SunPosition> {
        Ok(SunPosition {
            altitude: self.sun_alt_deg.to_radians(),
            azimuth: 0.0,
        })
    }

    fn moon_position(&self, _: Instant, _: f64, _: f64) -> RaybatsResult<MoonPosition> {
        Ok(MoonPosition {
            altitude: self.moon_alt_deg.to_radians(),
            azimuth: self.moon_az_sw_deg.to_radians(),
            distance_km: 384_400.0,
        })
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Provider that always fails.
struct BrokenSky;

impl EphemerisProvider for BrokenSky {
    fn sun_position(&self, _: Instant, _: f64, _: f64) -> RaybatsResult<SunPosition> {
        Err(RaybatsError::ephemeris("tables not loaded"))
    }

    fn moon_position(&self, _: Instant, _: f64, _: f64) -> RaybatsResult<MoonPosition> {
        Err(RaybatsError::ephemeris("tables not loaded"))
    }
}

fn service_with(
    ephemeris: Arc<dyn EphemerisProvider>,
    thresholds: Thresholds,
) -> ConditionsService {
    ConditionsService::new(
        ObservationAdapter::new(ephemeris, SkyGeometryModel::default()),
        thresholds,
        SearchSettings::default(),
        Arc::new(NoCloudCover),
    )
}

#[tokio::test]
async fn test_dark_sky_with_plane_ignored_is_go_all_day() {
    let sky = Arc::new(StaticSky {
        sun_alt_deg: -40.0,
        moon_alt_deg: -30.0,
        moon_az_sw_deg: 0.0,
    });
    // plane ceiling at 90 makes the verdict depend on sun and moon only
    let thresholds = Thresholds {
        plane_dist_max: 90.0,
        ..Thresholds::default()
    };
    let svc = service_with(sky, thresholds);
    let now = reference_instant();

    let report = svc.evaluate(&Observer::london(), now).await.unwrap();
    assert!(report.go);
    assert_eq!(report.status, "GO");
    assert_eq!(report.next_window.start, Some(now));
    assert_eq!(report.next_window.finish, Some(now + Duration::hours(24)));
    assert!(report.summary.contains("Next good window;"));
}

#[tokio::test]
async fn test_bright_sky_never_go() {
    let sky = Arc::new(StaticSky {
        sun_alt_deg: 45.0,
        moon_alt_deg: -30.0,
        moon_az_sw_deg: 0.0,
    });
    let svc = service_with(sky, Thresholds::default());

    let report = svc.evaluate(&Observer::london(), reference_instant()).await.unwrap();
    assert!(!report.go);
    assert_eq!(report.breakdown.sun_rating, 0.0);
    assert_eq!(report.next_window, GoWindow::none());
    assert!(report
        .summary
        .ends_with("No GO window found in the next 24 hours using these thresholds."));
}

#[tokio::test]
async fn test_cloud_bonus_flows_into_report() {
    let svc = ConditionsService::new(
        ObservationAdapter::default(),
        Thresholds::default(),
        SearchSettings::default(),
        Arc::new(FixedCloudCover(35.0)),
    );
    let report = svc.evaluate(&Observer::london(), reference_instant()).await.unwrap();
    assert_eq!(report.observation.cloud_pct, Some(35.0));
    assert!((report.breakdown.cloud_bonus - 5.0).abs() < 1e-12);
}

#[tokio::test]
async fn test_provider_failure_surfaces() {
    let svc = service_with(Arc::new(BrokenSky), Thresholds::default());
    let err = svc
        .evaluate(&Observer::london(), reference_instant())
        .await
        .unwrap_err();
    assert!(matches!(err, RaybatsError::Ephemeris { .. }));
}

#[test]
fn test_pillar_adjustment_matches_moon_position() {
    // the plane crosses the London horizon twice at this instant
    let now = reference_instant();
    let observer = Observer::london();
    let pillars = SkyGeometryModel::default().horizon_crossings_az(
        now,
        observer.latitude,
        observer.longitude,
    );
    assert_eq!(pillars.len(), 2, "pillars {:?}", pillars);
    let centre = mid_azimuth_deg(pillars[0], pillars[1]);

    // place the moon exactly on the centre; provider azimuth is south-based
    let sky = Arc::new(StaticSky {
        sun_alt_deg: -40.0,
        moon_alt_deg: -30.0,
        moon_az_sw_deg: centre - 180.0,
    });
    let svc = service_with(sky, Thresholds::default());
    let report = svc.evaluate_with_cloud(&observer, now, None).unwrap();

    assert_eq!(report.pillars, pillars);
    assert!(angular_distance_deg(report.observation.moon_az_deg, centre) < 1e-9);
    assert_eq!(report.breakdown.pillar_adjustment, 8.0);
}

#[test]
fn test_search_resolution_changes_sample_grid() {
    let now = reference_instant();
    let mut samples = Vec::new();
    scan_for_window(now, Duration::hours(2), Duration::minutes(30), |t| {
        samples.push(t);
        Ok(false)
    })
    .unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples.first(), Some(&now));
    assert_eq!(samples.last(), Some(&(now + Duration::hours(2))));
}

#[test]
fn test_real_ephemeris_window_is_night() {
    let svc = ConditionsService::new(
        ObservationAdapter::default(),
        Thresholds::default(),
        SearchSettings::default(),
        Arc::new(NoCloudCover),
    );
    let observer = Observer::new(-24.6272, -70.4042).unwrap();
    let now = reference_instant();
    let window = svc
        .next_window(&observer, now, svc.search_settings())
        .unwrap();

    if let Some(start) = window.start {
        let (sun, _, _) = svc.adapter().verdict_inputs(&observer, start).unwrap();
        assert!(sun <= 19.5);
    }
}
