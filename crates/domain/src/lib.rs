//! Domain layer for Route Explorer
//!
//! Contains the value objects and pure logic of route resolution:
//! coordinates, routed paths, summaries, and viewport fitting.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod viewport_fitter;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
pub use viewport_fitter::ViewportFitter;
