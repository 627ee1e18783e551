//! Geocoding and routing integration for Route Explorer
//!
//! Provides address geocoding via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org)
//! and driving routes via the [OSRM](https://project-osrm.org) HTTP API.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] handles
//! address-to-coordinate conversion via [`NominatimGeocodingClient`].
//! [`RoutingClient`] defines route queries, implemented by [`OsrmRoutingClient`].
//!
//! OSRM speaks `[longitude, latitude]`; everything this crate hands back is a
//! [`domain::Coordinate`] in (latitude, longitude) order. [`LonLat`] is the
//! only place the axis order is swapped.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{OsrmConfig, OsrmRoutingClient, RoutingClient};
//!
//! let client = OsrmRoutingClient::new(&OsrmConfig::default())?;
//! let route = client.route(san_francisco, los_angeles).await?;
//! println!("{} m in {} s", route.distance_meters, route.duration_seconds);
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{OsrmRoutingClient, RoutingClient};
pub use config::OsrmConfig;
pub use error::RoutingError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{LonLat, Route, coordinates_path};
