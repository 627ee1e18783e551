//! Routed path geometry

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Coordinate;

/// Ordered, non-empty sequence of coordinates in traversal order
///
/// The order defines the drawn polyline and is never changed after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct PathGeometry(Vec<Coordinate>);

impl PathGeometry {
    /// Create a geometry from points in traversal order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyGeometry` if `points` is empty.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, DomainError> {
        if points.is_empty() {
            return Err(DomainError::EmptyGeometry);
        }
        Ok(Self(points))
    }

    /// Points in traversal order
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Coordinate>> for PathGeometry {
    type Error = DomainError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PathGeometry> for Vec<Coordinate> {
    fn from(geometry: PathGeometry) -> Self {
        geometry.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(PathGeometry::new(vec![]), Err(DomainError::EmptyGeometry));
    }

    #[test]
    fn preserves_order() {
        let points = vec![c(37.77, -122.42), c(36.0, -120.0), c(34.05, -118.24)];
        let geometry = PathGeometry::new(points.clone()).unwrap();
        assert_eq!(geometry.points(), points.as_slice());
        assert_eq!(geometry.len(), 3);
    }

    #[test]
    fn single_point_is_a_valid_path() {
        let geometry = PathGeometry::new(vec![c(1.0, 2.0)]).unwrap();
        assert_eq!(geometry.points(), &[c(1.0, 2.0)]);
        assert!(!geometry.is_empty());
    }

    #[test]
    fn deserializing_empty_list_fails() {
        let result: Result<PathGeometry, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
