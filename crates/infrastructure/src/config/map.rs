//! Map display configuration
//!
//! Marker assets, tile layer and route styling handed to the rendering
//! layer at startup. Nothing here is applied as a process-wide default.

use domain::Coordinate;
use serde::{Deserialize, Serialize};

const LEAFLET_IMAGES: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images";

/// How routes and markers are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDisplayConfig {
    /// Marker icon image
    #[serde(default = "default_marker_icon_url")]
    pub marker_icon_url: String,

    /// Marker icon image for high-density displays
    #[serde(default = "default_marker_icon_retina_url")]
    pub marker_icon_retina_url: String,

    /// Marker shadow image
    #[serde(default = "default_marker_shadow_url")]
    pub marker_shadow_url: String,

    /// Tile URL template (`{s}`, `{z}`, `{x}`, `{y}`, `{r}` placeholders)
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Attribution shown with the tiles
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Map center before any route is shown
    #[serde(default = "default_center")]
    pub default_center: Coordinate,

    /// Zoom level before any route is shown
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    /// Route line colour (CSS)
    #[serde(default = "default_polyline_color")]
    pub polyline_color: String,

    /// Route line width in pixels
    #[serde(default = "default_polyline_weight")]
    pub polyline_weight: u32,

    /// Route line opacity, 0.0 to 1.0
    #[serde(default = "default_polyline_opacity")]
    pub polyline_opacity: f64,
}

fn default_marker_icon_url() -> String {
    format!("{LEAFLET_IMAGES}/marker-icon.png")
}

fn default_marker_icon_retina_url() -> String {
    format!("{LEAFLET_IMAGES}/marker-icon-2x.png")
}

fn default_marker_shadow_url() -> String {
    format!("{LEAFLET_IMAGES}/marker-shadow.png")
}

fn default_tile_url() -> String {
    "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string()
}

fn default_attribution() -> String {
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors \
     &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
        .to_string()
}

const fn default_center() -> Coordinate {
    Coordinate::new_unchecked(37.7749, -122.4194)
}

const fn default_zoom() -> u8 {
    13
}

fn default_polyline_color() -> String {
    "#3b82f6".to_string()
}

const fn default_polyline_weight() -> u32 {
    5
}

const fn default_polyline_opacity() -> f64 {
    0.7
}

impl Default for MapDisplayConfig {
    fn default() -> Self {
        Self {
            marker_icon_url: default_marker_icon_url(),
            marker_icon_retina_url: default_marker_icon_retina_url(),
            marker_shadow_url: default_marker_shadow_url(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            default_center: default_center(),
            default_zoom: default_zoom(),
            polyline_color: default_polyline_color(),
            polyline_weight: default_polyline_weight(),
            polyline_opacity: default_polyline_opacity(),
        }
    }
}

impl MapDisplayConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            tile_url: "http://localhost/{z}/{x}/{y}.png".to_string(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("marker_icon_url", &self.marker_icon_url),
            ("marker_icon_retina_url", &self.marker_icon_retina_url),
            ("marker_shadow_url", &self.marker_shadow_url),
            ("tile_url", &self.tile_url),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }

        if self.default_zoom > 20 {
            return Err("default_zoom must be between 0 and 20".to_string());
        }

        if !(0.0..=1.0).contains(&self.polyline_opacity) {
            return Err("polyline_opacity must be between 0.0 and 1.0".to_string());
        }

        if self.polyline_weight == 0 {
            return Err("polyline_weight must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assets_point_at_leaflet_images() {
        let config = MapDisplayConfig::default();
        assert_eq!(
            config.marker_icon_url,
            "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon.png"
        );
        assert!(config.marker_icon_retina_url.ends_with("marker-icon-2x.png"));
        assert!(config.marker_shadow_url.ends_with("marker-shadow.png"));
    }

    #[test]
    fn default_view() {
        let config = MapDisplayConfig::default();
        assert!((config.default_center.latitude() - 37.7749).abs() < f64::EPSILON);
        assert!((config.default_center.longitude() - -122.4194).abs() < f64::EPSILON);
        assert_eq!(config.default_zoom, 13);
        assert_eq!(config.polyline_color, "#3b82f6");
        assert_eq!(config.polyline_weight, 5);
    }

    #[test]
    fn default_is_valid() {
        assert!(MapDisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_opacity() {
        let config = MapDisplayConfig {
            polyline_opacity: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_marker_asset() {
        let config = MapDisplayConfig {
            marker_shadow_url: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("marker_shadow_url"));
    }

    #[test]
    fn rejects_out_of_range_center() {
        let toml = r"
            [default_center]
            latitude = 123.0
            longitude = 0.0
        ";
        assert!(toml::from_str::<MapDisplayConfig>(toml).is_err());
    }
}
