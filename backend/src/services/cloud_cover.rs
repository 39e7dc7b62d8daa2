//! Current cloud cover from a remote weather service.
//!
//! Cloud data only ever adds a bonus to the score, so every failure here
//! degrades to `None` with a warning instead of an error.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::CloudSettings;
use crate::error::{RaybatsError, RaybatsResult};
use crate::models::Observer;

/// Source of the current cloud cover percentage for a location.
#[async_trait]
pub trait CloudCoverSource: Send + Sync {
    /// Cloud cover in percent, `None` when unknown.
    async fn cloud_cover_pct(&self, observer: &Observer) -> Option<f64>;
}

/// Never reports cloud cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCloudCover;

#[async_trait]
impl CloudCoverSource for NoCloudCover {
    async fn cloud_cover_pct(&self, _observer: &Observer) -> Option<f64> {
        None
    }
}

/// Reports the same value for every location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCloudCover(pub f64);

#[async_trait]
impl CloudCoverSource for FixedCloudCover {
    async fn cloud_cover_pct(&self, _observer: &Observer) -> Option<f64> {
        Some(self.0)
    }
}

/// Open-Meteo style forecast client.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenMeteoClient {
    pub fn new(settings: &CloudSettings) -> RaybatsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                RaybatsError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self, observer: &Observer) -> Result<Value, String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", observer.latitude.to_string()),
                ("longitude", observer.longitude.to_string()),
                ("current", "cloud_cover".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("weather service returned {}", status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("invalid response body: {}", e))
    }
}

#[async_trait]
impl CloudCoverSource for OpenMeteoClient {
    async fn cloud_cover_pct(&self, observer: &Observer) -> Option<f64> {
        match self.fetch(observer).await {
            Ok(body) => {
                let pct = parse_cloud_cover(&body);
                if pct.is_none() {
                    log::warn!("Cloud cover missing from weather response; scoring without it");
                }
                pct
            }
            Err(e) => {
                log::warn!("Cloud cover lookup failed ({}); scoring without it", e);
                None
            }
        }
    }
}

/// Extract `current.cloud_cover` when it is a finite number.
pub fn parse_cloud_cover(body: &Value) -> Option<f64> {
    body.get("current")?
        .get("cloud_cover")?
        .as_f64()
        .filter(|pct| pct.is_finite())
}
