//! Location resolver port
//!
//! Turns a free-text place name into one coordinate via a geocoding service.

use async_trait::async_trait;
use domain::{Coordinate, LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::RouteError;

/// Port for geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationResolverPort: Send + Sync {
    /// Resolve `query` to the first candidate the service returns
    ///
    /// Zero candidates, malformed data and transport failures all surface
    /// as `RouteError::LocationNotFound` carrying the query text. No retries.
    async fn resolve(&self, query: &LocationQuery) -> Result<Coordinate, RouteError>;
}
