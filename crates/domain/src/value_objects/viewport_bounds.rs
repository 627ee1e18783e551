//! Viewport bounds value object

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Axis-aligned region covering a set of points, plus the visual padding
/// the renderer should keep around it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    /// Minimum latitude / minimum longitude corner
    pub south_west: Coordinate,
    /// Maximum latitude / maximum longitude corner
    pub north_east: Coordinate,
    /// Padding in screen pixels, applied by the rendering layer
    pub padding_px: u32,
}

impl ViewportBounds {
    /// Whether the point lies inside the bounds (edges inclusive)
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.south_west.latitude()..=self.north_east.latitude()).contains(&point.latitude())
            && (self.south_west.longitude()..=self.north_east.longitude())
                .contains(&point.longitude())
    }

    /// Whether both corners coincide (single-point input)
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.south_west == self.north_east
    }

    /// Geometric centre of the region
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new_unchecked(
            f64::midpoint(self.south_west.latitude(), self.north_east.latitude()),
            f64::midpoint(self.south_west.longitude(), self.north_east.longitude()),
        )
    }
}
