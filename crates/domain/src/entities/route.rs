//! A routed driving path as returned by the routing service

use serde::{Deserialize, Serialize};

use crate::value_objects::PathGeometry;

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// Best route between two coordinates, with raw metrics
///
/// Distance and duration stay in meters and seconds; conversion to display
/// units happens only when text is produced, so other consumers can scale
/// the raw values without converting twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedPath {
    /// Path from start to end in traversal order
    pub geometry: PathGeometry,
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total duration in seconds
    pub duration_seconds: f64,
}

impl RoutedPath {
    /// Human-readable distance, e.g. `"382.1 miles"`
    #[must_use]
    pub fn distance_text(&self) -> String {
        format_distance_miles(self.distance_meters)
    }

    /// Human-readable duration, e.g. `"360 mins"`
    #[must_use]
    pub fn duration_text(&self) -> String {
        format_duration_minutes(self.duration_seconds)
    }
}

/// Format a distance in meters as miles with one decimal place
#[must_use]
pub fn format_distance_miles(meters: f64) -> String {
    format!("{:.1} miles", meters / METERS_PER_MILE)
}

/// Format a duration in seconds as whole minutes
#[must_use]
pub fn format_duration_minutes(seconds: f64) -> String {
    format!("{} mins", seconds_to_whole_minutes(seconds))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds_to_whole_minutes(seconds: f64) -> u64 {
    (seconds.max(0.0) / 60.0).round() as u64
}
