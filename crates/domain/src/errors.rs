//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// User input rejected before any lookup
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),
}
