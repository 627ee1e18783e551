//! Route query adapter - Implements RouteQueryPort using OSRM

use application::RouteError;
use application::ports::RouteQueryPort;
use async_trait::async_trait;
use domain::{Coordinate, PathGeometry, RoutedPath};
use integration_routing::{OsrmConfig, OsrmRoutingClient, Route, RoutingClient};
use tracing::{debug, instrument, warn};

/// Queries driving routes through a [`RoutingClient`]
pub struct RouteQueryAdapter {
    client: Box<dyn RoutingClient>,
}

impl std::fmt::Debug for RouteQueryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteQueryAdapter")
            .field("client", &"RoutingClient")
            .finish()
    }
}

impl RouteQueryAdapter {
    /// Create an adapter backed by OSRM
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &OsrmConfig) -> Result<Self, RouteError> {
        let client = OsrmRoutingClient::new(config)
            .map_err(|e| RouteError::TransportError(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Create an adapter around any routing client
    pub fn with_client(client: impl RoutingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Convert an integration route into the domain path
    fn convert_route(route: Route) -> Result<RoutedPath, domain::DomainError> {
        Ok(RoutedPath {
            geometry: PathGeometry::new(route.geometry)?,
            distance_meters: route.distance_meters,
            duration_seconds: route.duration_seconds,
        })
    }
}

#[async_trait]
impl RouteQueryPort for RouteQueryAdapter {
    #[instrument(skip(self), fields(start = %start, end = %end))]
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<RoutedPath, RouteError> {
        let route = self.client.route(start, end).await.map_err(|e| {
            warn!(%e, "Route query failed");
            RouteError::route_unavailable(start, end)
        })?;

        let path = Self::convert_route(route).map_err(|e| {
            warn!(%e, "Route has no usable geometry");
            RouteError::route_unavailable(start, end)
        })?;

        debug!(points = path.geometry.len(), "Route converted");
        Ok(path)
    }
}
