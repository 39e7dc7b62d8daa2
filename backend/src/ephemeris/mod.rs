//! Sun and moon ephemeris seam.
//!
//! Providers report positions in their own convention: altitudes in radians,
//! azimuth in radians measured from **south, positive westward**. Conversion
//! to the engine's north-based, east-positive azimuth happens once, in
//! [`crate::services::observation::ObservationAdapter`].

pub mod low_precision;

use crate::error::RaybatsResult;
use crate::models::Instant;

pub use low_precision::LowPrecisionEphemeris;

/// Sun position in provider convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Altitude above the horizon, radians
    pub altitude: f64,
    /// Azimuth from south, positive westward, radians
    pub azimuth: f64,
}

/// Moon position in provider convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Altitude above the horizon, radians
    pub altitude: f64,
    /// Azimuth from south, positive westward, radians
    pub azimuth: f64,
    /// Geocentric distance, kilometres
    pub distance_km: f64,
}

/// Capability that locates the sun and moon for an observer.
///
/// Implementations must be cheap and deterministic: the window search calls
/// them a few hundred times per evaluation.
pub trait EphemerisProvider: Send + Sync {
    fn sun_position(
        &self,
        instant: Instant,
        lat_deg: f64,
        lon_deg: f64,
    ) -> RaybatsResult<SunPosition>;

    fn moon_position(
        &self,
        instant: Instant,
        lat_deg: f64,
        lon_deg: f64,
    ) -> RaybatsResult<MoonPosition>;

    /// Short identifier used in logs.
    fn name(&self) -> &str {
        "ephemeris"
    }
}
