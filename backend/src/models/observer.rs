use serde::{Deserialize, Serialize};

use crate::error::{RaybatsError, RaybatsResult};

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180), east positive
    pub longitude: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> RaybatsResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(RaybatsError::invalid_observer(
                "Latitude must be between -90 and 90 degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(RaybatsError::invalid_observer(
                "Longitude must be between -180 and 180 degrees",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Fallback location used when the caller has no position of its own.
    pub const fn london() -> Self {
        Self {
            latitude: 51.5074,
            longitude: -0.1278,
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::london()
    }
}
