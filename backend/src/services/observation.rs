//! Builds [`Observation`] values from the ephemeris and the sky geometry.
//!
//! This is the only place where provider azimuths (from south, positive
//! westward, radians) are converted to the engine convention (from north,
//! positive eastward, degrees).

use std::fmt;
use std::sync::Arc;

use crate::astro::angles::normalize_deg;
use crate::astro::SkyGeometryModel;
use crate::ephemeris::{EphemerisProvider, LowPrecisionEphemeris};
use crate::error::{RaybatsError, RaybatsResult};
use crate::models::{HorizontalCoord, Instant, Observation, Observer};

/// Convert a south-based, west-positive azimuth (degrees) to north-based,
/// east-positive in `[0, 360)`.
pub fn south_west_to_north_east_deg(az_deg: f64) -> f64 {
    normalize_deg(az_deg + 180.0)
}

/// Adapter over an optional ephemeris provider plus the geometry model.
#[derive(Clone)]
pub struct ObservationAdapter {
    ephemeris: Option<Arc<dyn EphemerisProvider>>,
    geometry: SkyGeometryModel,
}

impl fmt::Debug for ObservationAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservationAdapter")
            .field("ephemeris", &self.ephemeris.as_ref().map(|e| e.name().to_string()))
            .field("geometry", &self.geometry)
            .finish()
    }
}

impl Default for ObservationAdapter {
    fn default() -> Self {
        Self::new(Arc::new(LowPrecisionEphemeris::new()), SkyGeometryModel::default())
    }
}

impl ObservationAdapter {
    pub fn new(ephemeris: Arc<dyn EphemerisProvider>, geometry: SkyGeometryModel) -> Self {
        Self {
            ephemeris: Some(ephemeris),
            geometry,
        }
    }

    /// Adapter with no ephemeris; every sun/moon query fails with
    /// [`RaybatsError::EphemerisUnavailable`].
    pub fn without_ephemeris(geometry: SkyGeometryModel) -> Self {
        Self {
            ephemeris: None,
            geometry,
        }
    }

    pub fn geometry(&self) -> &SkyGeometryModel {
        &self.geometry
    }

    pub fn has_ephemeris(&self) -> bool {
        self.ephemeris.is_some()
    }

    fn provider(&self) -> RaybatsResult<&dyn EphemerisProvider> {
        self.ephemeris
            .as_deref()
            .ok_or(RaybatsError::EphemerisUnavailable)
    }

    /// Sun altitude in degrees.
    pub fn sun_alt_deg(&self, observer: &Observer, instant: Instant) -> RaybatsResult<f64> {
        let provider = self.provider()?;
        let sun = provider.sun_position(instant, observer.latitude, observer.longitude)?;
        ensure_finite(provider.name(), "sun altitude", sun.altitude)?;
        Ok(sun.altitude.to_degrees())
    }

    /// Moon altitude and north-based azimuth in degrees.
    pub fn moon_horizontal(
        &self,
        observer: &Observer,
        instant: Instant,
    ) -> RaybatsResult<HorizontalCoord> {
        let provider = self.provider()?;
        let moon = provider.moon_position(instant, observer.latitude, observer.longitude)?;
        ensure_finite(provider.name(), "moon altitude", moon.altitude)?;
        ensure_finite(provider.name(), "moon azimuth", moon.azimuth)?;
        Ok(HorizontalCoord::new(
            moon.altitude.to_degrees(),
            south_west_to_north_east_deg(moon.azimuth.to_degrees()),
        ))
    }

    pub fn plane_dist_deg(&self, observer: &Observer, instant: Instant) -> f64 {
        self.geometry
            .plane_distance_from_zenith_deg(instant, observer.latitude, observer.longitude)
    }

    /// Galactic plane horizon crossings, empty or two ascending azimuths.
    pub fn pillars(&self, observer: &Observer, instant: Instant) -> Vec<f64> {
        self.geometry
            .horizon_crossings_az(instant, observer.latitude, observer.longitude)
    }

    /// Full observation at an instant with an externally fetched cloud value.
    pub fn observe(
        &self,
        observer: &Observer,
        instant: Instant,
        cloud_pct: Option<f64>,
    ) -> RaybatsResult<Observation> {
        let sun_alt_deg = self.sun_alt_deg(observer, instant)?;
        let moon = self.moon_horizontal(observer, instant)?;
        let plane_dist_deg = self.plane_dist_deg(observer, instant);

        log::debug!(
            "Observation at {} for ({}, {}): sun {:.2}, moon {:.2}/{:.2}, plane {:.2}",
            instant,
            observer.latitude,
            observer.longitude,
            sun_alt_deg,
            moon.alt.value(),
            moon.az.value(),
            plane_dist_deg
        );

        Ok(Observation {
            sun_alt_deg,
            moon_alt_deg: moon.alt.value(),
            moon_az_deg: moon.az.value(),
            plane_dist_deg,
            cloud_pct,
        })
    }

    /// Just the quantities the go verdict needs: sun altitude, moon
    /// altitude and plane distance.
    pub fn verdict_inputs(
        &self,
        observer: &Observer,
        instant: Instant,
    ) -> RaybatsResult<(f64, f64, f64)> {
        let provider = self.provider()?;
        let sun = provider.sun_position(instant, observer.latitude, observer.longitude)?;
        let moon = provider.moon_position(instant, observer.latitude, observer.longitude)?;
        ensure_finite(provider.name(), "sun altitude", sun.altitude)?;
        ensure_finite(provider.name(), "moon altitude", moon.altitude)?;
        Ok((
            sun.altitude.to_degrees(),
            moon.altitude.to_degrees(),
            self.plane_dist_deg(observer, instant),
        ))
    }
}

fn ensure_finite(provider: &str, what: &str, value: f64) -> RaybatsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RaybatsError::ephemeris(format!(
            "{} returned a non-finite {}",
            provider, what
        )))
    }
}
