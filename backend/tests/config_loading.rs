//! Configuration loading from files and environment variables.

mod support;

use raybats::config::{RaybatsConfig, CONFIG_PATH_ENV};
use raybats::models::Observer;
use raybats::RaybatsError;
use support::{with_scoped_env, write_config};

const LA_PALMA: &str = r#"
[thresholds]
sun_alt_max = -12.0
moon_alt_max = 0.0

[search]
horizon_hours = 12.0
step_minutes = 10.0

[geometry]
sample_step_deg = 2.5

[cloud]
enabled = false

[observer]
latitude = 28.7624
longitude = -17.8892

[server]
host = "127.0.0.1"
port = 9000
"#;

#[test]
fn test_from_file_reads_every_section() {
    let (_dir, path) = write_config(LA_PALMA);
    let config = RaybatsConfig::from_file(&path).unwrap();

    assert_eq!(config.thresholds.sun_alt_max, -12.0);
    assert_eq!(config.thresholds.moon_alt_max, 0.0);
    assert_eq!(config.thresholds.plane_dist_max, 30.0);
    assert_eq!(config.search.horizon_hours, 12.0);
    assert_eq!(config.search.step_minutes, 10.0);
    assert_eq!(config.geometry.sample_step_deg, 2.5);
    assert_eq!(config.geometry.dedup_tolerance_deg, 6.0);
    assert!(!config.cloud.enabled);
    assert_eq!(config.observer, Observer::new(28.7624, -17.8892).unwrap());
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_load_uses_config_env_path() {
    let (_dir, path) = write_config(LA_PALMA);
    let path = path.to_string_lossy().to_string();

    let config = with_scoped_env(
        &[
            (CONFIG_PATH_ENV, Some(path.as_str())),
            ("HOST", None),
            ("PORT", None),
        ],
        RaybatsConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.observer.latitude, 28.7624);
}

#[test]
fn test_env_overrides_server_settings() {
    let (_dir, path) = write_config(LA_PALMA);
    let path = path.to_string_lossy().to_string();

    let config = with_scoped_env(
        &[
            (CONFIG_PATH_ENV, Some(path.as_str())),
            ("HOST", Some("0.0.0.0")),
            ("PORT", Some("3001")),
        ],
        RaybatsConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3001);
}

#[test]
fn test_invalid_port_rejected() {
    let result = with_scoped_env(&[("PORT", Some("eighty"))], || {
        let mut config = RaybatsConfig::default();
        config.apply_env_overrides()
    });
    assert!(matches!(result, Err(RaybatsError::Configuration { .. })));
}

#[test]
fn test_missing_env_config_file_is_an_error() {
    let result = with_scoped_env(
        &[(CONFIG_PATH_ENV, Some("/nonexistent/raybats.toml"))],
        RaybatsConfig::load,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("/nonexistent/raybats.toml"));
}

#[test]
fn test_invalid_file_contents_rejected() {
    let (_dir, path) = write_config("[search]\nstep_minutes = -5.0\n");
    let err = RaybatsConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, RaybatsError::Configuration { .. }));
    assert!(err.to_string().contains("step_minutes"));
}

#[test]
fn test_load_without_any_file_uses_defaults() {
    let config = with_scoped_env(
        &[(CONFIG_PATH_ENV, None), ("HOST", None), ("PORT", None)],
        RaybatsConfig::load,
    )
    .unwrap();
    assert_eq!(config, RaybatsConfig::default());
}
