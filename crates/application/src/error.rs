//! Application-level errors

use domain::{Coordinate, DomainError};
use thiserror::Error;

/// Why a route resolution failed
///
/// Every failure of an external call is converted to one of these kinds at
/// the point of the call, so the display layer only ever sees this set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The geocoding service could not turn the query into a coordinate
    #[error("Location not found: {query}")]
    LocationNotFound {
        /// The query text as submitted
        query: String,
    },

    /// The routing service produced no usable route
    #[error("No route available from {start} to {end}")]
    RouteUnavailable {
        /// Resolved start coordinate
        start: Coordinate,
        /// Resolved end coordinate
        end: Coordinate,
    },

    /// A precondition was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network or client failure not attributable to a single lookup
    #[error("Transport error: {0}")]
    TransportError(String),
}

impl RouteError {
    /// Create a location-not-found error for a query
    pub fn location_not_found(query: impl Into<String>) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    /// Create a route-unavailable error for a coordinate pair
    #[must_use]
    pub const fn route_unavailable(start: Coordinate, end: Coordinate) -> Self {
        Self::RouteUnavailable { start, end }
    }

    /// Stable machine-readable name of the error kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LocationNotFound { .. } => "location_not_found",
            Self::RouteUnavailable { .. } => "route_unavailable",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::TransportError(_) => "transport_error",
        }
    }
}

impl From<DomainError> for RouteError {
    fn from(err: DomainError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
