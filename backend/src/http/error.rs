//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::RaybatsError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Engine error
    Engine(RaybatsError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Engine(e) => {
                let msg = e.to_string();
                match e {
                    RaybatsError::InvalidObserver { .. } => {
                        (StatusCode::BAD_REQUEST, ApiError::new("INVALID_OBSERVER", msg))
                    }
                    RaybatsError::InvalidSearch { .. } => {
                        (StatusCode::BAD_REQUEST, ApiError::new("INVALID_SEARCH", msg))
                    }
                    RaybatsError::EphemerisUnavailable => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ApiError::new("EPHEMERIS_UNAVAILABLE", msg),
                    ),
                    RaybatsError::Ephemeris { .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("EPHEMERIS_ERROR", msg),
                    ),
                    RaybatsError::Configuration { .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("CONFIGURATION_ERROR", msg),
                    ),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        }
        (status, Json(error)).into_response()
    }
}

impl From<RaybatsError> for AppError {
    fn from(err: RaybatsError) -> Self {
        AppError::Engine(err)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_status_codes() {
        let cases = [
            (RaybatsError::invalid_observer("bad"), StatusCode::BAD_REQUEST, "INVALID_OBSERVER"),
            (RaybatsError::invalid_search("bad"), StatusCode::BAD_REQUEST, "INVALID_SEARCH"),
            (
                RaybatsError::EphemerisUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
                "EPHEMERIS_UNAVAILABLE",
            ),
            (
                RaybatsError::ephemeris("nan"),
                StatusCode::INTERNAL_SERVER_ERROR,
                "EPHEMERIS_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            let (s, body) = AppError::from(err).status_and_body();
            assert_eq!(s, status);
            assert_eq!(body.code, code);
        }
    }

    #[test]
    fn test_internal_error_is_server_error() {
        let (status, body) =
            AppError::Internal("Task join error: cancelled".to_string()).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert!(body.message.contains("join"));
    }

    #[test]
    fn test_api_error_body_shape() {
        let json = serde_json::to_value(ApiError::new("X", "y")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "X", "message": "y"}));
    }
}
