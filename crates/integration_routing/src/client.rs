//! OSRM routing client
//!
//! Queries the best driving route between two coordinates using the
//! [OSRM route service](https://project-osrm.org/docs/v5.24.0/api/#route-service).

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::OsrmConfig;
use crate::error::RoutingError;
use crate::models::{LonLat, Route, coordinates_path};

/// Response code OSRM uses for success
const OSRM_OK: &str = "Ok";

/// Trait for routing service clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Query the best route from `start` to `end`
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RoutingError>;
}

/// OSRM HTTP API client
#[derive(Debug)]
pub struct OsrmRoutingClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Route URL for a coordinate pair
    fn route_url(&self, start: Coordinate, end: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coordinates_path(&[start, end])
        )
    }

    /// Parse a raw OSRM route response, selecting the first route
    ///
    /// OSRM reports failures in the body (`code` other than "Ok"), often with
    /// an HTTP 4xx status, so the body is inspected before the status.
    fn parse_route_response(body: &str) -> Result<Route, RoutingError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if raw.code != OSRM_OK {
            return Err(RoutingError::NoRoute {
                code: raw.code,
                message: raw.message.unwrap_or_default(),
            });
        }

        let best = raw
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute {
                code: OSRM_OK.to_string(),
                message: "response contained no routes".to_string(),
            })?;

        let geometry = best
            .geometry
            .coordinates
            .into_iter()
            .map(|p| {
                p.to_coordinate()
                    .map_err(|e| RoutingError::InvalidCoordinate(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route {
            geometry,
            distance_meters: best.distance,
            duration_seconds: best.duration,
        })
    }
}

#[async_trait]
impl RoutingClient for OsrmRoutingClient {
    #[instrument(skip(self), fields(start = %start, end = %end))]
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RoutingError> {
        let url = self.route_url(start, end);
        let params = [("overview", "full"), ("geometries", "geojson")];

        debug!(?url, "Querying route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let result = match Self::parse_route_response(&body) {
            Err(RoutingError::ParseError(_)) if !status.is_success() => {
                Err(RoutingError::RequestFailed(format!("HTTP {status}")))
            },
            other => other,
        };

        match &result {
            Ok(route) => debug!(
                points = route.geometry.len(),
                distance_meters = route.distance_meters,
                duration_seconds = route.duration_seconds,
                "Route found"
            ),
            Err(e) => warn!(%status, %e, "Route query failed"),
        }

        result
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    distance: f64,
    duration: f64,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<LonLat>,
}
