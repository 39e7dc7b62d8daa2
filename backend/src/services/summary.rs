//! Human-readable report lines.

use crate::config::Thresholds;
use crate::models::{GoWindow, Observation, Observer};

/// Degrees with one decimal, e.g. `-12.3°`.
pub fn fmt_deg(value: f64) -> String {
    format!("{:.1}°", value)
}

/// Whole percent, or `n/a` when unknown.
pub fn fmt_cloud(cloud_pct: Option<f64>) -> String {
    match cloud_pct {
        Some(pct) => format!("{}%", pct.round() as i64),
        None => "n/a".to_string(),
    }
}

pub fn status_label(go: bool) -> &'static str {
    if go {
        "GO"
    } else {
        "NO GO"
    }
}

/// Sentence describing the next go window, times in UTC.
pub fn window_line(window: &GoWindow, horizon_hours: f64) -> String {
    match (window.start, window.finish) {
        (Some(start), Some(finish)) => format!(
            "Next good window; {} to {} UTC.",
            start.format("%H:%M"),
            finish.format("%H:%M")
        ),
        _ => format!(
            "No GO window found in the next {} hours using these thresholds.",
            horizon_hours
        ),
    }
}

/// One-paragraph summary of an evaluation.
pub fn summary_text(
    observer: &Observer,
    observation: &Observation,
    thresholds: &Thresholds,
    window: &GoWindow,
    horizon_hours: f64,
) -> String {
    [
        format!("Location; {:.4}, {:.4}.", observer.latitude, observer.longitude),
        format!(
            "Sun; {} (≤ {}°).",
            fmt_deg(observation.sun_alt_deg),
            thresholds.sun_alt_max
        ),
        format!(
            "Moon; {} (≤ {}°).",
            fmt_deg(observation.moon_alt_deg),
            thresholds.moon_alt_max
        ),
        format!(
            "Plane overhead; |b| {} (≤ {}°).",
            fmt_deg(observation.plane_dist_deg),
            thresholds.plane_dist_max
        ),
        format!("Cloud; {}.", fmt_cloud(observation.cloud_pct)),
        window_line(window, horizon_hours),
    ]
    .join(" ")
}
