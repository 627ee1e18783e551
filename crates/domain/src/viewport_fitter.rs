//! Viewport fitting
//!
//! Computes the smallest axis-aligned region that shows a set of points.
//! Pure computation, no rendering concerns beyond carrying the padding.

use crate::errors::DomainError;
use crate::value_objects::{Coordinate, ViewportBounds};

/// Frames a set of coordinates for auto-zooming a map view
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportFitter;

impl ViewportFitter {
    /// Fit bounds around `points`, keeping `padding_px` for the renderer
    ///
    /// A single point yields degenerate bounds with both corners equal to it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `points` is empty.
    pub fn fit(points: &[Coordinate], padding_px: u32) -> Result<ViewportBounds, DomainError> {
        let Some(first) = points.first() else {
            return Err(DomainError::invalid_argument(
                "cannot fit a viewport around zero points",
            ));
        };

        let (mut min_lat, mut max_lat) = (first.latitude(), first.latitude());
        let (mut min_lon, mut max_lon) = (first.longitude(), first.longitude());

        for p in &points[1..] {
            min_lat = min_lat.min(p.latitude());
            max_lat = max_lat.max(p.latitude());
            min_lon = min_lon.min(p.longitude());
            max_lon = max_lon.max(p.longitude());
        }

        // Extremes of valid coordinates are themselves valid.
        Ok(ViewportBounds {
            south_west: Coordinate::new_unchecked(min_lat, min_lon),
            north_east: Coordinate::new_unchecked(max_lat, max_lon),
            padding_px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn empty_input_is_invalid_argument() {
        let err = ViewportFitter::fit(&[], 50).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn single_point_is_degenerate() {
        let p = c(37.77, -122.42);
        let bounds = ViewportFitter::fit(&[p], 50).unwrap();
        assert_eq!(bounds.south_west, p);
        assert_eq!(bounds.north_east, p);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn california_route() {
        let points = [c(37.77, -122.42), c(36.0, -120.0), c(34.05, -118.24)];
        let bounds = ViewportFitter::fit(&points, 50).unwrap();
        assert_eq!(bounds.south_west, c(34.05, -122.42));
        assert_eq!(bounds.north_east, c(37.77, -118.24));
        assert_eq!(bounds.padding_px, 50);
    }

    #[test]
    fn order_does_not_matter() {
        let a = [c(1.0, 5.0), c(-3.0, 2.0), c(4.0, -1.0)];
        let b = [c(4.0, -1.0), c(1.0, 5.0), c(-3.0, 2.0)];
        assert_eq!(
            ViewportFitter::fit(&a, 0).unwrap(),
            ViewportFitter::fit(&b, 0).unwrap()
        );
    }
}
