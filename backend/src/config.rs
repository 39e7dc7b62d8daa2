//! Configuration file support.
//!
//! All settings live in one TOML file; every section and field is optional
//! and falls back to the reference values.
//!
//! ```toml
//! [thresholds]
//! sun_alt_max = 19.5
//! moon_alt_max = 4.0
//!
//! [search]
//! horizon_hours = 24.0
//! step_minutes = 5.0
//!
//! [cloud]
//! enabled = true
//! timeout_secs = 10
//!
//! [observer]
//! latitude = 51.5074
//! longitude = -0.1278
//!
//! [server]
//! port = 8080
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::astro::GeometrySettings;
use crate::error::{RaybatsError, RaybatsResult};
use crate::models::Observer;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "RAYBATS_CONFIG";

/// Scoring and verdict thresholds.
///
/// Immutable once built; injected into the scorer and the window search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Sun altitude ceiling for a go verdict, degrees
    pub sun_alt_max: f64,
    /// Band above the sun ceiling over which the sun rating decays to 0
    pub sun_tolerance: f64,
    /// Moon altitude ceiling for a go verdict, degrees
    pub moon_alt_max: f64,
    pub moon_tolerance: f64,
    /// Galactic plane distance-from-zenith ceiling, degrees
    pub plane_dist_max: f64,
    pub plane_tolerance: f64,
    /// Largest score bonus granted for cloud cover
    pub cloud_bonus_max: f64,
    /// Cloud percentage at which the bonus saturates
    pub cloud_good_at: f64,
    /// Moon within this distance of the pillar centre earns the bonus;
    /// at twice this distance or more the penalty applies
    pub pillar_centre_tolerance: f64,
    pub pillar_bonus: f64,
    pub pillar_penalty: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            sun_alt_max: 19.5,
            sun_tolerance: 10.0,
            moon_alt_max: 4.0,
            moon_tolerance: 6.0,
            plane_dist_max: 30.0,
            plane_tolerance: 20.0,
            cloud_bonus_max: 10.0,
            cloud_good_at: 70.0,
            pillar_centre_tolerance: 15.0,
            pillar_bonus: 8.0,
            pillar_penalty: 8.0,
        }
    }
}

impl Thresholds {
    /// Hard go/no-go gate on sun, moon and plane distance.
    pub fn is_go(&self, sun_alt_deg: f64, moon_alt_deg: f64, plane_dist_deg: f64) -> bool {
        sun_alt_deg <= self.sun_alt_max
            && moon_alt_deg <= self.moon_alt_max
            && plane_dist_deg <= self.plane_dist_max
    }

    pub fn validate(&self) -> RaybatsResult<()> {
        let positive = [
            ("sun_tolerance", self.sun_tolerance),
            ("moon_tolerance", self.moon_tolerance),
            ("plane_tolerance", self.plane_tolerance),
            ("cloud_good_at", self.cloud_good_at),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(RaybatsError::configuration(format!(
                    "thresholds.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let finite = [
            ("sun_alt_max", self.sun_alt_max),
            ("moon_alt_max", self.moon_alt_max),
            ("plane_dist_max", self.plane_dist_max),
            ("cloud_bonus_max", self.cloud_bonus_max),
            ("pillar_centre_tolerance", self.pillar_centre_tolerance),
            ("pillar_bonus", self.pillar_bonus),
            ("pillar_penalty", self.pillar_penalty),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(RaybatsError::configuration(format!(
                    "thresholds.{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.pillar_centre_tolerance < 0.0 {
            return Err(RaybatsError::configuration(
                "thresholds.pillar_centre_tolerance must not be negative",
            ));
        }
        Ok(())
    }
}

/// Forward window search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// How far ahead to look, hours
    pub horizon_hours: f64,
    /// Sampling step, minutes
    pub step_minutes: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            horizon_hours: 24.0,
            step_minutes: 5.0,
        }
    }
}

impl SearchSettings {
    /// Longest accepted search horizon, hours
    pub const MAX_HORIZON_HOURS: f64 = 168.0;
    /// Most samples a single search may request
    pub const MAX_SAMPLES: f64 = 10_000.0;

    pub fn horizon(&self) -> chrono::Duration {
        chrono::Duration::milliseconds((self.horizon_hours * 3_600_000.0).round() as i64)
    }

    pub fn step(&self) -> chrono::Duration {
        chrono::Duration::milliseconds((self.step_minutes * 60_000.0).round() as i64)
    }

    pub fn validate(&self) -> RaybatsResult<()> {
        if !(self.horizon_hours > 0.0 && self.horizon_hours.is_finite()) {
            return Err(RaybatsError::invalid_search(format!(
                "horizon_hours must be positive, got {}",
                self.horizon_hours
            )));
        }
        if self.horizon_hours > Self::MAX_HORIZON_HOURS {
            return Err(RaybatsError::invalid_search(format!(
                "horizon_hours must not exceed {}, got {}",
                Self::MAX_HORIZON_HOURS,
                self.horizon_hours
            )));
        }
        if !(self.step_minutes > 0.0 && self.step_minutes.is_finite()) {
            return Err(RaybatsError::invalid_search(format!(
                "step_minutes must be positive, got {}",
                self.step_minutes
            )));
        }
        if self.step() <= chrono::Duration::zero() {
            return Err(RaybatsError::invalid_search(
                "step_minutes is below millisecond resolution",
            ));
        }
        if self.step_minutes > self.horizon_hours * 60.0 {
            return Err(RaybatsError::invalid_search(
                "step_minutes must not exceed the search horizon",
            ));
        }
        let samples = self.horizon_hours * 60.0 / self.step_minutes;
        if samples > Self::MAX_SAMPLES {
            return Err(RaybatsError::invalid_search(format!(
                "search would take {:.0} samples, at most {} are allowed",
                samples,
                Self::MAX_SAMPLES
            )));
        }
        Ok(())
    }
}

/// Remote cloud-cover lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudSettings {
    /// Disable to score without ever contacting the weather service
    pub enabled: bool,
    /// Forecast endpoint queried with latitude/longitude parameters
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RaybatsConfig {
    pub thresholds: Thresholds,
    pub search: SearchSettings,
    pub geometry: GeometrySettings,
    pub cloud: CloudSettings,
    /// Fallback observer when a request carries no coordinates
    pub observer: Observer,
    pub server: ServerSettings,
}

impl RaybatsConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> RaybatsResult<Self> {
        let config: RaybatsConfig = toml::from_str(content).map_err(|e| {
            RaybatsError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RaybatsConfig)` if successful
    /// * `Err(RaybatsError::Configuration)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> RaybatsResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RaybatsError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `raybats.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> RaybatsResult<Self> {
        let search_paths = [
            PathBuf::from("raybats.toml"),
            PathBuf::from("backend/raybats.toml"),
            PathBuf::from("../raybats.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RaybatsError::configuration(
            "No raybats.toml found in standard locations",
        ))
    }

    /// Resolve configuration the way the binaries do.
    ///
    /// 1. `RAYBATS_CONFIG` if set (a broken file there is an error)
    /// 2. `raybats.toml` in a standard location
    /// 3. built-in defaults
    ///
    /// `HOST` and `PORT` are applied on top.
    pub fn load() -> RaybatsResult<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => match Self::from_default_location() {
                Ok(config) => config,
                Err(RaybatsError::Configuration { message })
                    if message.starts_with("No raybats.toml") =>
                {
                    log::debug!("{}; using built-in defaults", message);
                    Self::default()
                }
                Err(e) => return Err(e),
            },
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override server host/port from `HOST` and `PORT`.
    pub fn apply_env_overrides(&mut self) -> RaybatsResult<()> {
        if let Ok(host) = env::var("HOST") {
            if !host.trim().is_empty() {
                self.server.host = host.trim().to_string();
            }
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                RaybatsError::configuration(format!(
                    "PORT must be a valid port number, got {:?}",
                    port
                ))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> RaybatsResult<()> {
        self.thresholds.validate()?;
        self.search
            .validate()
            .map_err(|e| RaybatsError::configuration(format!("search: {}", e)))?;
        self.geometry.validate()?;
        Observer::new(self.observer.latitude, self.observer.longitude)
            .map_err(|e| RaybatsError::configuration(format!("observer: {}", e)))?;
        if self.cloud.enabled && self.cloud.endpoint.trim().is_empty() {
            return Err(RaybatsError::configuration(
                "cloud.endpoint must be set when cloud lookups are enabled",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_reference_values() {
        let t = Thresholds::default();
        assert_eq!(t.sun_alt_max, 19.5);
        assert_eq!(t.sun_tolerance, 10.0);
        assert_eq!(t.moon_alt_max, 4.0);
        assert_eq!(t.moon_tolerance, 6.0);
        assert_eq!(t.plane_dist_max, 30.0);
        assert_eq!(t.plane_tolerance, 20.0);
        assert_eq!(t.cloud_bonus_max, 10.0);
        assert_eq!(t.cloud_good_at, 70.0);
        assert_eq!(t.pillar_centre_tolerance, 15.0);
        assert_eq!(t.pillar_bonus, 8.0);
        assert_eq!(t.pillar_penalty, 8.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_is_go_boundaries_inclusive() {
        let t = Thresholds::default();
        assert!(t.is_go(19.5, 4.0, 30.0));
        assert!(!t.is_go(19.6, 4.0, 30.0));
        assert!(!t.is_go(19.5, 4.1, 30.0));
        assert!(!t.is_go(19.5, 4.0, 30.1));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = RaybatsConfig::from_toml_str("").unwrap();
        assert_eq!(config, RaybatsConfig::default());
        assert_eq!(config.observer, Observer::london());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config = RaybatsConfig::from_toml_str(include_str!("../raybats.example.toml")).unwrap();
        assert_eq!(config, RaybatsConfig::default());
    }

    #[test]
    fn test_parse_partial_sections() {
        let config = RaybatsConfig::from_toml_str(
            r#"
            [thresholds]
            moon_alt_max = 0.0

            [search]
            step_minutes = 10.0

            [observer]
            latitude = 28.7624
            longitude = -17.8892
            "#,
        )
        .unwrap();

        assert_eq!(config.thresholds.moon_alt_max, 0.0);
        assert_eq!(config.thresholds.sun_alt_max, 19.5);
        assert_eq!(config.search.step_minutes, 10.0);
        assert_eq!(config.search.horizon_hours, 24.0);
        assert_eq!(config.observer.latitude, 28.7624);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let err = RaybatsConfig::from_toml_str("[thresholds]\nsun_tolerance = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("sun_tolerance"));
    }

    #[test]
    fn test_invalid_observer_rejected() {
        let err = RaybatsConfig::from_toml_str("[observer]\nlatitude = 120.0\nlongitude = 0.0\n")
            .unwrap_err();
        assert!(matches!(err, RaybatsError::Configuration { .. }));
        assert!(err.to_string().contains("observer"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = RaybatsConfig::from_toml_str("[search\nhorizon_hours = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_search_settings_durations() {
        let s = SearchSettings::default();
        assert_eq!(s.horizon(), chrono::Duration::hours(24));
        assert_eq!(s.step(), chrono::Duration::minutes(5));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_search_settings_rejects_bad_values() {
        let zero_step = SearchSettings {
            step_minutes: 0.0,
            ..Default::default()
        };
        assert!(matches!(zero_step.validate(), Err(RaybatsError::InvalidSearch { .. })));

        let step_too_big = SearchSettings {
            horizon_hours: 1.0,
            step_minutes: 90.0,
        };
        assert!(step_too_big.validate().is_err());

        let negative = SearchSettings {
            horizon_hours: -1.0,
            step_minutes: 5.0,
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_search_settings_rejects_oversized_searches() {
        let huge_horizon = SearchSettings {
            horizon_hours: 1e15,
            step_minutes: 5.0,
        };
        assert!(matches!(huge_horizon.validate(), Err(RaybatsError::InvalidSearch { .. })));

        let too_many_samples = SearchSettings {
            horizon_hours: 168.0,
            step_minutes: 0.001,
        };
        let err = too_many_samples.validate().unwrap_err();
        assert!(err.to_string().contains("samples"));

        let week_at_five_minutes = SearchSettings {
            horizon_hours: 168.0,
            step_minutes: 5.0,
        };
        assert!(week_at_five_minutes.validate().is_ok());
    }

    #[test]
    fn test_oversized_search_in_file_is_rejected() {
        let err = RaybatsConfig::from_toml_str("[search]\nhorizon_hours = 10000.0\n").unwrap_err();
        assert!(matches!(err, RaybatsError::Configuration { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RaybatsConfig::from_file("/nonexistent/raybats.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
