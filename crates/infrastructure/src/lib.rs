//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Nominatim and OSRM
//! clients, loads configuration, and wires the route resolution pipeline.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use application::{RouteError, RouteResolutionPipeline};
use tracing::info;

pub use adapters::{LocationResolverAdapter, RouteQueryAdapter};
pub use config::{AppConfig, ConfigError, MapDisplayConfig};

/// Build a pipeline backed by the configured geocoding and routing services
///
/// # Errors
///
/// Returns `RouteError::TransportError` if an HTTP client cannot be built.
pub fn build_pipeline(config: &AppConfig) -> Result<RouteResolutionPipeline, RouteError> {
    let resolver = LocationResolverAdapter::new(&config.geocoding)?;
    let router = RouteQueryAdapter::new(&config.routing)?;

    info!(
        geocoding = %config.geocoding.base_url,
        routing = %config.routing.base_url,
        profile = %config.routing.profile,
        "Route resolution pipeline ready"
    );

    Ok(RouteResolutionPipeline::new(
        Arc::new(resolver),
        Arc::new(router),
        config.pipeline.clone(),
    ))
}
