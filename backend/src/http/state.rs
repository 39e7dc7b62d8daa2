//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::Observer;
use crate::services::ConditionsService;

/// Shared application state passed to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Engine shared by every request
    pub service: Arc<ConditionsService>,
    /// Location used when a request carries no coordinates
    pub fallback_observer: Observer,
}

impl AppState {
    pub fn new(service: Arc<ConditionsService>, fallback_observer: Observer) -> Self {
        Self {
            service,
            fallback_observer,
        }
    }
}
