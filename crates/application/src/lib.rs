//! Application layer - Use cases and orchestration
//!
//! Defines the ports for the external geocoding and routing services and
//! the route resolution pipeline that drives them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::RouteError;
pub use ports::*;
pub use services::*;
