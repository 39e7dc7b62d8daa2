//! # Raybats
//!
//! Milky Way viewing-conditions engine.
//!
//! For an observer and an instant the engine reports a suitability score in
//! `[0, 100]`, a hard go/no-go verdict, the azimuths where the galactic plane
//! meets the horizon, and the next time window that satisfies the verdict.
//!
//! ## Architecture
//!
//! - [`astro`]: sidereal time, frame transforms and galactic-plane geometry
//! - [`ephemeris`]: sun/moon provider seam plus a built-in low-precision provider
//! - [`models`]: observer, time and coordinate types, observations and results
//! - [`services`]: observation adapter, scorer, window search, cloud cover,
//!   and the conditions service that ties them together
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based REST API (feature `http-server`)
//!
//! ## Example
//!
//! ```no_run
//! use chrono::Utc;
//! use raybats::models::Observer;
//! use raybats::services::ObservationAdapter;
//!
//! let adapter = ObservationAdapter::default();
//! let observer = Observer::new(28.7624, -17.8892)?;
//! let obs = adapter.observe(&observer, Utc::now(), None)?;
//! println!("sun {:.1}°, plane {:.1}° from zenith", obs.sun_alt_deg, obs.plane_dist_deg);
//! # Ok::<(), raybats::error::RaybatsError>(())
//! ```

pub mod astro;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::{RaybatsConfig, SearchSettings, Thresholds};
pub use error::{RaybatsError, RaybatsResult};
pub use models::{GoWindow, Observation, Observer, ScoreBreakdown, ScoreResult};
