//! Map view payload
//!
//! Everything a map widget needs to draw the current pipeline snapshot:
//! tile layer, route line, markers and either a fitted frame or the default
//! center. Marker assets come from [`MapDisplayConfig`].

use application::{PipelineSnapshot, TravelAlternative, travel_alternatives};
use domain::{Coordinate, RouteResult, RouteSummary, ViewportBounds};
use infrastructure::MapDisplayConfig;
use serde::Serialize;

/// Hint shown while no route exists
pub const PLACEHOLDER_HINT: &str = "Enter locations to see the route";

/// Base map tiles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

/// How the map is framed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MapFrame {
    /// Fit the route bounds, centred on their midpoint
    Fit {
        bounds: ViewportBounds,
        center: Coordinate,
    },
    /// Fixed center and zoom
    Center { center: Coordinate, zoom: u8 },
}

/// Route line styling and positions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLine {
    pub positions: Vec<Coordinate>,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

/// A start or end marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub position: Coordinate,
    pub label: String,
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
}

/// Complete map payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub tiles: TileLayer,
    pub frame: MapFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteLine>,
    pub markers: Vec<MarkerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouteSummary>,
    pub alternatives: Vec<TravelAlternative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MapView {
    /// View before any route exists
    #[must_use]
    pub fn placeholder(config: &MapDisplayConfig) -> Self {
        Self {
            tiles: tile_layer(config),
            frame: MapFrame::Center {
                center: config.default_center,
                zoom: config.default_zoom,
            },
            route: None,
            markers: Vec::new(),
            summary: None,
            alternatives: Vec::new(),
            placeholder: Some(PLACEHOLDER_HINT.to_string()),
            error: None,
        }
    }

    /// View of a resolved route
    #[must_use]
    pub fn for_route(result: &RouteResult, config: &MapDisplayConfig) -> Self {
        let [start, end] = result.markers;
        let marker = |position: Coordinate, label: &str| MarkerView {
            position,
            label: label.to_string(),
            icon_url: config.marker_icon_url.clone(),
            icon_retina_url: config.marker_icon_retina_url.clone(),
            shadow_url: config.marker_shadow_url.clone(),
        };

        Self {
            tiles: tile_layer(config),
            frame: MapFrame::Fit {
                bounds: result.bounds,
                center: result.bounds.center(),
            },
            route: Some(RouteLine {
                positions: result.polyline.points().to_vec(),
                color: config.polyline_color.clone(),
                weight: config.polyline_weight,
                opacity: config.polyline_opacity,
            }),
            markers: vec![
                marker(start, &result.summary.start_label),
                marker(end, &result.summary.end_label),
            ],
            summary: Some(result.summary.clone()),
            alternatives: travel_alternatives(result),
            placeholder: None,
            error: None,
        }
    }

    /// View of whatever the pipeline last published
    ///
    /// A failed cycle keeps the previous route on the map and adds the error.
    #[must_use]
    pub fn from_snapshot(snapshot: &PipelineSnapshot, config: &MapDisplayConfig) -> Self {
        let view = snapshot.result.as_deref().map_or_else(
            || Self::placeholder(config),
            |result| Self::for_route(result, config),
        );
        Self {
            error: snapshot.error_message(),
            ..view
        }
    }
}

fn tile_layer(config: &MapDisplayConfig) -> TileLayer {
    TileLayer {
        url: config.tile_url.clone(),
        attribution: config.attribution.clone(),
    }
}

/// Plain-text report of a resolved route
#[must_use]
pub fn route_report(result: &RouteResult) -> String {
    let summary = &result.summary;
    let bounds = &result.bounds;
    let mut lines = vec![
        format!("📍 {} → {}", summary.start_label, summary.end_label),
        format!("🛣️  Distance: {}", summary.distance_text),
        format!("⏱️  Duration: {}", summary.duration_text),
        String::new(),
        "Travel alternatives:".to_string(),
    ];
    lines.extend(
        travel_alternatives(result)
            .iter()
            .map(|alt| format!("  {}", alt.format_line())),
    );
    lines.push(String::new());
    lines.push(format!(
        "🗺️  Bounds: {} to {} (padding {}px)",
        bounds.south_west, bounds.north_east, bounds.padding_px
    ));
    lines.join("\n")
}
