//! Entities - the products of a route resolution

mod route;
mod route_result;

pub use route::{METERS_PER_MILE, RoutedPath, format_distance_miles, format_duration_minutes};
pub use route_result::{RouteResult, RouteSummary};
