//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to
//! [`crate::services::ConditionsService`].

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Utc;

use super::dto::{
    ConditionsReport, HealthResponse, LocationQuery, Thresholds, WindowQuery, WindowResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::Observer;
use crate::services::summary::window_line;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Resolve the observer for a request.
///
/// Neither coordinate → the fallback location; one without the other is
/// rejected.
pub fn resolve_observer(query: LocationQuery, fallback: Observer) -> Result<Observer, AppError> {
    match (query.lat, query.lon) {
        (None, None) => Ok(fallback),
        (Some(lat), Some(lon)) => Ok(Observer::new(lat, lon)?),
        _ => Err(AppError::BadRequest(
            "lat and lon must be given together".to_string(),
        )),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Conditions
// =============================================================================

/// GET /v1/conditions?lat=&lon=
///
/// Score, verdict, pillars and next window for an observer, evaluated now.
pub async fn get_conditions(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> HandlerResult<ConditionsReport> {
    let Query(query) = query?;
    let observer = resolve_observer(query, state.fallback_observer)?;

    let now = Utc::now();
    let cloud_pct = state.service.cloud_cover_pct(&observer).await;

    let service = state.service.clone();
    let report = tokio::task::spawn_blocking(move || {
        service.evaluate_with_cloud(&observer, now, cloud_pct)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(report))
}

/// GET /v1/window?lat=&lon=&horizon_hours=&step_minutes=
///
/// Next go window only; cloud cover is never consulted.
pub async fn get_window(
    State(state): State<AppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> HandlerResult<WindowResponse> {
    let Query(query) = query?;
    let observer = resolve_observer(query.location(), state.fallback_observer)?;
    let search = query.search_settings(state.service.search_settings());

    let now = Utc::now();
    let service = state.service.clone();
    let window = tokio::task::spawn_blocking(move || service.next_window(&observer, now, &search))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(WindowResponse {
        observer,
        search,
        summary: window_line(&window, search.horizon_hours),
        window,
    }))
}

/// GET /v1/thresholds
pub async fn get_thresholds(State(state): State<AppState>) -> HandlerResult<Thresholds> {
    Ok(Json(*state.service.thresholds()))
}
