//! Adapters implementing application ports

mod location_resolver_adapter;
mod route_query_adapter;

pub use location_resolver_adapter::LocationResolverAdapter;
pub use route_query_adapter::RouteQueryAdapter;
