//! Route query port
//!
//! Asks a routing service for the best driving path between two coordinates.

use async_trait::async_trait;
use domain::{Coordinate, RoutedPath};
#[cfg(test)]
use mockall::automock;

use crate::error::RouteError;

/// Port for driving-route lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouteQueryPort: Send + Sync {
    /// Query the best route from `start` to `end`
    ///
    /// Coordinates are always (latitude, longitude) here; adapters translate
    /// to the service's own axis order. `start == end` is legal and may yield
    /// a single-point geometry. Failures surface as
    /// `RouteError::RouteUnavailable`. No retries.
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<RoutedPath, RouteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RouteQueryPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RouteQueryPort>();
    }
}
