//! Routing error types

use thiserror::Error;

/// Errors that can occur while querying the routing service
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service answered with a non-"Ok" code or without routes
    #[error("No route found ({code}): {message}")]
    NoRoute {
        /// OSRM response code, e.g. "NoRoute" or "InvalidQuery"
        code: String,
        /// Message from the service, if any
        message: String,
    },

    /// Service returned a coordinate outside the valid range
    #[error("Invalid coordinate in response: {0}")]
    InvalidCoordinate(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoutingError::NoRoute {
            code: "NoRoute".to_string(),
            message: "Impossible route between points".to_string(),
        };
        assert!(err.to_string().contains("NoRoute"));
        assert!(err.to_string().contains("Impossible route"));

        let err = RoutingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = RoutingError::RequestFailed("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Request failed: HTTP 500");
    }
}
