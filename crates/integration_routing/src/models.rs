//! Routing data models
//!
//! The routed path handed to callers, and the `[longitude, latitude]` wire
//! position used by OSRM in both requests and responses.

use domain::{Coordinate, DomainError};
use serde::{Deserialize, Serialize};

/// A position as OSRM writes it: `[longitude, latitude]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat(pub [f64; 2]);

impl LonLat {
    /// Longitude (first on the wire)
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.0[0]
    }

    /// Latitude (second on the wire)
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.0[1]
    }

    /// Convert to a (latitude, longitude) coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if the values are out of range.
    pub fn to_coordinate(self) -> Result<Coordinate, DomainError> {
        Coordinate::new(self.latitude(), self.longitude())
    }

    /// Path segment for a route request: `"lon,lat"`
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        format!("{},{}", self.longitude(), self.latitude())
    }
}

impl From<Coordinate> for LonLat {
    fn from(c: Coordinate) -> Self {
        Self([c.longitude(), c.latitude()])
    }
}

/// Coordinates part of an OSRM route URL: `"lon,lat;lon,lat;..."`
#[must_use]
pub fn coordinates_path(points: &[Coordinate]) -> String {
    points
        .iter()
        .map(|&c| LonLat::from(c).to_path_segment())
        .collect::<Vec<_>>()
        .join(";")
}

/// Best route returned by the routing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Path in traversal order, already in (latitude, longitude) order
    pub geometry: Vec<Coordinate>,
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total duration in seconds
    pub duration_seconds: f64,
}
