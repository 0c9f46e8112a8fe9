//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request rejected before any lookup was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Geocoding returned no match for the query
    #[error("Location not found: {query}")]
    NotFound {
        /// The query that produced no match
        query: String,
    },

    /// Network, HTTP or parse failure talking to an external service
    #[error("External service error: {0}")]
    ServiceError(String),

    /// Device location denied or unsupported
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Create a not found error for a query
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Message suitable for showing to the person who triggered the action
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(_) | Self::Domain(DomainError::InvalidInput(_)) => {
                "Please enter both locations.".to_string()
            },
            Self::NotFound { query } => format!("Location not found: {query}"),
            Self::LocationUnavailable(_) => {
                "Your current location is unavailable.".to_string()
            },
            Self::ServiceError(_) | Self::Domain(DomainError::InvalidCoordinates(_)) => {
                "Could not reach the location service. Please try again.".to_string()
            },
            Self::Configuration(detail) => format!("Configuration error: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_query() {
        let err = ApplicationError::not_found("Atlantis");
        assert_eq!(err.to_string(), "Location not found: Atlantis");
        assert_eq!(err.user_message(), "Location not found: Atlantis");
    }

    #[test]
    fn invalid_input_user_message() {
        let err = ApplicationError::InvalidInput("start is empty".to_string());
        assert_eq!(err.user_message(), "Please enter both locations.");

        let err: ApplicationError = DomainError::InvalidInput("empty".to_string()).into();
        assert_eq!(err.user_message(), "Please enter both locations.");
    }

    #[test]
    fn service_error_hides_detail_from_user() {
        let err = ApplicationError::ServiceError("HTTP 502 Bad Gateway".to_string());
        assert!(err.to_string().contains("502"));
        assert!(!err.user_message().contains("502"));
    }

    #[test]
    fn location_unavailable_display() {
        let err = ApplicationError::LocationUnavailable("no provider configured".to_string());
        assert!(err.to_string().contains("no provider configured"));
    }
}
