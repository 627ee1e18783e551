//! Presentation-ready result of one successful resolution

use serde::{Deserialize, Serialize};

use crate::entities::RoutedPath;
use crate::errors::DomainError;
use crate::value_objects::{Coordinate, PathGeometry, ViewportBounds};
use crate::viewport_fitter::ViewportFitter;

/// Distance/duration summary shown next to the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Distance in display units, e.g. "382.1 miles"
    pub distance_text: String,
    /// Duration in display units, e.g. "360 mins"
    pub duration_text: String,
    /// The start location exactly as the user typed it
    pub start_label: String,
    /// The end location exactly as the user typed it
    pub end_label: String,
}

/// Everything the display layer needs to draw a resolved route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Route polyline in traversal order
    pub polyline: PathGeometry,
    /// Start and end markers (the geocoded points, not the path ends)
    pub markers: [Coordinate; 2],
    /// Viewport covering the full polyline
    pub bounds: ViewportBounds,
    /// Text summary
    pub summary: RouteSummary,
    /// Unconverted distance in meters
    pub distance_meters: f64,
    /// Unconverted duration in seconds
    pub duration_seconds: f64,
}

impl RouteResult {
    /// Assemble a result from a routed path and the user's original labels
    ///
    /// # Errors
    ///
    /// Propagates viewport fitting errors; unreachable for a valid geometry.
    pub fn assemble(
        route: RoutedPath,
        start: Coordinate,
        end: Coordinate,
        start_label: &str,
        end_label: &str,
        padding_px: u32,
    ) -> Result<Self, DomainError> {
        let bounds = ViewportFitter::fit(route.geometry.points(), padding_px)?;
        let summary = RouteSummary {
            distance_text: route.distance_text(),
            duration_text: route.duration_text(),
            start_label: start_label.to_string(),
            end_label: end_label.to_string(),
        };

        Ok(Self {
            polyline: route.geometry,
            markers: [start, end],
            bounds,
            summary,
            distance_meters: route.distance_meters,
            duration_seconds: route.duration_seconds,
        })
    }
}
