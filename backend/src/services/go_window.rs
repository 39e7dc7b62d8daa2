//! Forward search for the next contiguous go interval.
//!
//! The scan samples `now, now + step, ...` while `t <= now + horizon`.
//! A false→true transition opens the window, the next true→false closes it
//! and ends the scan. If the verdict is still true at the end of the horizon
//! the window closes at `now + horizon`. Searches needing more than
//! [`SearchSettings::MAX_SAMPLES`] samples are refused up front.

use chrono::Duration;

use crate::config::{SearchSettings, Thresholds};
use crate::error::{RaybatsError, RaybatsResult};
use crate::models::{GoWindow, Instant, Observer};

use super::observation::ObservationAdapter;

/// Scan with an arbitrary fallible verdict.
///
/// The first verdict error aborts the scan and is returned unchanged.
pub fn scan_for_window<F>(
    now: Instant,
    horizon: Duration,
    step: Duration,
    mut verdict: F,
) -> RaybatsResult<GoWindow>
where
    F: FnMut(Instant) -> RaybatsResult<bool>,
{
    if horizon <= Duration::zero() {
        return Err(RaybatsError::invalid_search("horizon must be positive"));
    }
    if step <= Duration::zero() {
        return Err(RaybatsError::invalid_search("step must be positive"));
    }
    if step < Duration::milliseconds(1) {
        return Err(RaybatsError::invalid_search("step is below millisecond resolution"));
    }
    let samples = horizon.num_milliseconds() / step.num_milliseconds();
    if samples as f64 > SearchSettings::MAX_SAMPLES {
        return Err(RaybatsError::invalid_search(format!(
            "search would take {} samples, at most {} are allowed",
            samples,
            SearchSettings::MAX_SAMPLES
        )));
    }

    let end = now
        .checked_add_signed(horizon)
        .ok_or_else(|| RaybatsError::invalid_search("search horizon runs past the calendar"))?;
    let mut in_go = false;
    let mut start = None;
    let mut t = now;

    while t <= end {
        let go = verdict(t)?;
        if go && !in_go {
            in_go = true;
            start = Some(t);
        }
        if !go && in_go {
            return Ok(GoWindow {
                start,
                finish: Some(t),
            });
        }
        t = match t.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }

    if in_go {
        Ok(GoWindow {
            start,
            finish: Some(end),
        })
    } else {
        Ok(GoWindow::none())
    }
}

/// Next go window for an observer using the adapter's ephemeris.
///
/// Only sun altitude, moon altitude and plane distance feed the verdict;
/// cloud cover and the pillar rule are ignored.
pub fn find_next_go_window(
    adapter: &ObservationAdapter,
    thresholds: &Thresholds,
    observer: &Observer,
    now: Instant,
    settings: &SearchSettings,
) -> RaybatsResult<GoWindow> {
    settings.validate()?;

    let window = scan_for_window(now, settings.horizon(), settings.step(), |t| {
        let (sun, moon, plane) = adapter.verdict_inputs(observer, t)?;
        Ok(thresholds.is_go(sun, moon, plane))
    })?;

    log::debug!(
        "Window search from {} over {}h: start={:?} finish={:?}",
        now,
        settings.horizon_hours,
        window.start,
        window.finish
    );
    Ok(window)
}
