//! Location resolver adapter - Implements LocationResolverPort using Nominatim

use application::RouteError;
use application::ports::LocationResolverPort;
use async_trait::async_trait;
use domain::{Coordinate, LocationQuery};
use integration_routing::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
use tracing::{debug, instrument, warn};

/// Resolves place names through a [`GeocodingClient`]
pub struct LocationResolverAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for LocationResolverAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolverAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl LocationResolverAdapter {
    /// Create an adapter backed by Nominatim
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, RouteError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| RouteError::TransportError(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Create an adapter around any geocoding client
    pub fn with_client(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }
}

#[async_trait]
impl LocationResolverPort for LocationResolverAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn resolve(&self, query: &LocationQuery) -> Result<Coordinate, RouteError> {
        match self.client.geocode(query.as_str()).await {
            Ok(coordinate) => {
                debug!(%coordinate, "Location resolved");
                Ok(coordinate)
            },
            Err(e) => {
                warn!(%e, "Failed to resolve location");
                Err(RouteError::location_not_found(query.as_str()))
            },
        }
    }
}
