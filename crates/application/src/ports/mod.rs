//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod location_resolver_port;
mod route_query_port;

#[cfg(test)]
pub use location_resolver_port::MockLocationResolverPort;
pub use location_resolver_port::LocationResolverPort;
#[cfg(test)]
pub use route_query_port::MockRouteQueryPort;
pub use route_query_port::RouteQueryPort;
