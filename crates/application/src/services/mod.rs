//! Application services

mod route_pipeline;
mod travel_alternatives;

pub use route_pipeline::{
    LocationPair, PipelineConfig, PipelineSnapshot, ResolutionOutcome, ResolutionState,
    RouteResolutionPipeline,
};
pub use travel_alternatives::{TravelAlternative, TravelMode, travel_alternatives};
