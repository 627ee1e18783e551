//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod location_query;
mod path_geometry;
mod viewport_bounds;

pub use coordinate::Coordinate;
pub use location_query::LocationQuery;
pub use path_geometry::PathGeometry;
pub use viewport_bounds::ViewportBounds;
