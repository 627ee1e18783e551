//! Route resolution pipeline
//!
//! Turns a (source, destination) pair of place names into a [`RouteResult`]:
//! geocode both ends, query the driving route, fit the viewport, build the
//! summary. Each submission gets a generation number; only the newest
//! generation may publish, so a slow earlier lookup can never overwrite the
//! outcome of a later one.

use std::fmt;
use std::sync::Arc;

use domain::{Coordinate, LocationQuery, RouteResult};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::error::RouteError;
use crate::ports::{LocationResolverPort, RouteQueryPort};

/// Pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Padding around the fitted route, in screen pixels
    #[serde(default = "default_viewport_padding_px")]
    pub viewport_padding_px: u32,
}

const fn default_viewport_padding_px() -> u32 {
    50
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            viewport_padding_px: default_viewport_padding_px(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the padding is unreasonably large.
    pub fn validate(&self) -> Result<(), String> {
        if self.viewport_padding_px > 500 {
            return Err("viewport_padding_px must be 500 or less".to_string());
        }
        Ok(())
    }
}

/// Where a resolution cycle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Geocoding source and destination
    Resolving,
    /// Querying the routing service
    Routing,
    /// Last cycle produced a route
    Succeeded,
    /// Last cycle failed
    Failed,
}

impl ResolutionState {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Routing => "routing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pair of place names of the current cycle, as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPair {
    /// Start location text
    pub source: String,
    /// End location text
    pub destination: String,
}

/// What the display layer reads
///
/// `result` is the last successful route. It survives later `Resolving`,
/// `Routing` and `Failed` states and is only replaced by the next success.
#[derive(Debug, Clone, Default)]
pub struct PipelineSnapshot {
    /// Generation of the most recent submission (0 before the first)
    pub generation: u64,
    /// Current state
    pub state: ResolutionState,
    /// Pair of the most recent submission
    pub pair: Option<LocationPair>,
    /// Last successful route
    pub result: Option<Arc<RouteResult>>,
    /// Error of the most recent cycle, if it failed
    pub error: Option<RouteError>,
}

impl PipelineSnapshot {
    /// Message to show in place of the route, if the last cycle failed
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Outcome of one `submit` call, from the caller's point of view
#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    /// Source or destination was blank; nothing happened
    Ignored,
    /// This submission produced the published route
    Succeeded(Arc<RouteResult>),
    /// This submission failed and its error was published
    Failed(RouteError),
    /// A newer submission took over; nothing from this one was published
    Superseded,
}

/// Orchestrates geocoding, routing and viewport fitting for one location pair
/// at a time, last request wins
pub struct RouteResolutionPipeline {
    resolver: Arc<dyn LocationResolverPort>,
    router: Arc<dyn RouteQueryPort>,
    config: PipelineConfig,
    snapshot: watch::Sender<PipelineSnapshot>,
}

impl fmt::Debug for RouteResolutionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteResolutionPipeline")
            .field("config", &self.config)
            .field("generation", &self.snapshot.borrow().generation)
            .finish_non_exhaustive()
    }
}

impl RouteResolutionPipeline {
    /// Create a new pipeline in the `Idle` state
    pub fn new(
        resolver: Arc<dyn LocationResolverPort>,
        router: Arc<dyn RouteQueryPort>,
        config: PipelineConfig,
    ) -> Self {
        let (snapshot, _) = watch::channel(PipelineSnapshot::default());
        Self {
            resolver,
            router,
            config,
            snapshot,
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> PipelineSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Current state
    pub fn state(&self) -> ResolutionState {
        self.snapshot.borrow().state
    }

    /// Receive every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<PipelineSnapshot> {
        self.snapshot.subscribe()
    }

    /// Resolve a new (source, destination) pair
    ///
    /// Supersedes any cycle still in flight. The returned future may be
    /// awaited from several tasks at once; each call reports whether its own
    /// outcome was published or discarded.
    #[instrument(skip(self))]
    pub async fn submit(&self, source: &str, destination: &str) -> ResolutionOutcome {
        let (Ok(source_query), Ok(destination_query)) =
            (LocationQuery::new(source), LocationQuery::new(destination))
        else {
            debug!("Ignoring submission with a blank location");
            return ResolutionOutcome::Ignored;
        };

        let generation = self.begin(source, destination);
        info!(generation, "Resolving locations");

        let (start, end) = match self.resolve_pair(&source_query, &destination_query).await {
            Ok(pair) => pair,
            Err(err) => return self.fail(generation, err),
        };

        if !self.advance(generation, ResolutionState::Routing) {
            return Self::superseded(generation);
        }
        info!(generation, %start, %end, "Querying route");

        let route = match self.router.route(start, end).await {
            Ok(route) => route,
            Err(err) => return self.fail(generation, err),
        };

        match RouteResult::assemble(
            route,
            start,
            end,
            source,
            destination,
            self.config.viewport_padding_px,
        ) {
            Ok(result) => self.succeed(generation, Arc::new(result)),
            Err(err) => self.fail(generation, err.into()),
        }
    }

    /// Geocode both ends, once if they name the same place
    async fn resolve_pair(
        &self,
        source: &LocationQuery,
        destination: &LocationQuery,
    ) -> Result<(Coordinate, Coordinate), RouteError> {
        if source.normalized() == destination.normalized() {
            debug!(%source, "Source and destination match, resolving once");
            let c = self.resolver.resolve(source).await?;
            return Ok((c, c));
        }

        tokio::try_join!(
            self.resolver.resolve(source),
            self.resolver.resolve(destination)
        )
    }

    /// Start a new generation; keeps the last good result visible
    fn begin(&self, source: &str, destination: &str) -> u64 {
        let mut generation = 0;
        self.snapshot.send_modify(|s| {
            s.generation += 1;
            generation = s.generation;
            s.state = ResolutionState::Resolving;
            s.pair = Some(LocationPair {
                source: source.to_string(),
                destination: destination.to_string(),
            });
            s.error = None;
        });
        generation
    }

    /// Move to `state` if `generation` is still current
    fn advance(&self, generation: u64, state: ResolutionState) -> bool {
        self.snapshot.send_if_modified(|s| {
            if s.generation != generation {
                return false;
            }
            s.state = state;
            true
        })
    }

    fn succeed(&self, generation: u64, result: Arc<RouteResult>) -> ResolutionOutcome {
        let published = self.snapshot.send_if_modified(|s| {
            if s.generation != generation {
                return false;
            }
            s.state = ResolutionState::Succeeded;
            s.result = Some(Arc::clone(&result));
            s.error = None;
            true
        });

        if !published {
            return Self::superseded(generation);
        }
        info!(
            generation,
            distance = %result.summary.distance_text,
            duration = %result.summary.duration_text,
            "Route resolved"
        );
        ResolutionOutcome::Succeeded(result)
    }

    fn fail(&self, generation: u64, err: RouteError) -> ResolutionOutcome {
        let published = self.snapshot.send_if_modified(|s| {
            if s.generation != generation {
                return false;
            }
            s.state = ResolutionState::Failed;
            s.error = Some(err.clone());
            true
        });

        if !published {
            debug!(generation, %err, "Discarding error of superseded cycle");
            return Self::superseded(generation);
        }
        warn!(generation, kind = err.kind(), %err, "Route resolution failed");
        ResolutionOutcome::Failed(err)
    }

    fn superseded(generation: u64) -> ResolutionOutcome {
        debug!(generation, "Cycle superseded by a newer submission");
        ResolutionOutcome::Superseded
    }
}
