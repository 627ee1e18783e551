//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range, or not finite
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A precondition of a domain operation was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Location query was empty after trimming
    #[error("Location query must not be empty")]
    EmptyQuery,

    /// A path geometry needs at least one point
    #[error("Path geometry must contain at least one coordinate")]
    EmptyGeometry,
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
