//! Geocoding error types

use thiserror::Error;

/// Errors that can occur talking to the geocoding or position services
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be understood
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Service answered but had nothing for the query
    #[error("No match for: {0}")]
    NoMatch(String),

    /// Query rejected before sending
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Position service refused to locate this client
    #[error("Location denied: {0}")]
    LocationDenied(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

impl GeocodingError {
    /// Returns true if the service answered but found nothing
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch(_))
    }

    /// Map a transport error from reqwest
    pub(crate) fn from_transport(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::ParseError(e.to_string())
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}
