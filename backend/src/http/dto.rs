//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::config::{SearchSettings, Thresholds};
pub use crate::models::GoWindow;
pub use crate::services::ConditionsReport;

use crate::models::Observer;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Optional observer coordinates. Both or neither must be given.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Query for `GET /v1/window`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WindowQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub horizon_hours: Option<f64>,
    pub step_minutes: Option<f64>,
}

impl WindowQuery {
    pub fn location(&self) -> LocationQuery {
        LocationQuery {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// Request settings layered over the configured defaults.
    pub fn search_settings(&self, defaults: &SearchSettings) -> SearchSettings {
        SearchSettings {
            horizon_hours: self.horizon_hours.unwrap_or(defaults.horizon_hours),
            step_minutes: self.step_minutes.unwrap_or(defaults.step_minutes),
        }
    }
}

/// Response for `GET /v1/window`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowResponse {
    pub observer: Observer,
    pub search: SearchSettings,
    #[serde(flatten)]
    pub window: GoWindow,
    pub summary: String,
}
