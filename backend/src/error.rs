//! Error types for the viewing-conditions engine.
//!
//! The numeric core is total over valid inputs; these errors cover the
//! boundaries around it: observer validation, the ephemeris seam, and
//! configuration loading. Missing cloud data and degenerate horizon geometry
//! are deliberately *not* errors.

/// Result type used throughout the crate.
pub type RaybatsResult<T> = Result<T, RaybatsError>;

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RaybatsError {
    /// Latitude or longitude outside its valid range.
    #[error("Invalid observer: {message}")]
    InvalidObserver { message: String },

    /// No sun/moon ephemeris provider is available.
    ///
    /// Kept separate from numeric results so callers can surface a clear
    /// diagnostic instead of scoring with zero altitudes.
    #[error("Ephemeris provider unavailable; sun and moon positions cannot be computed")]
    EphemerisUnavailable,

    /// The ephemeris provider returned values that cannot be used.
    #[error("Ephemeris error: {message}")]
    Ephemeris { message: String },

    /// Configuration file missing, unreadable, or invalid.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Window search parameters that would not terminate or make no sense.
    #[error("Invalid search parameters: {message}")]
    InvalidSearch { message: String },
}

impl RaybatsError {
    /// Create an invalid observer error.
    pub fn invalid_observer(message: impl Into<String>) -> Self {
        Self::InvalidObserver {
            message: message.into(),
        }
    }

    /// Create an ephemeris error.
    pub fn ephemeris(message: impl Into<String>) -> Self {
        Self::Ephemeris {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid search error.
    pub fn invalid_search(message: impl Into<String>) -> Self {
        Self::InvalidSearch {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RaybatsError::invalid_observer("Latitude must be between -90 and 90 degrees");
        assert_eq!(
            err.to_string(),
            "Invalid observer: Latitude must be between -90 and 90 degrees"
        );

        let err = RaybatsError::EphemerisUnavailable;
        assert!(err.to_string().contains("unavailable"));
    }
}
