//! Interactive mode
//!
//! Reads `source | destination` lines from stdin. Every line is a new
//! submission that supersedes whatever is still in flight; state changes
//! are printed as the pipeline publishes them.

use std::sync::Arc;

use application::{PipelineSnapshot, ResolutionOutcome, ResolutionState, RouteResolutionPipeline};
use infrastructure::MapDisplayConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::view::{MapView, route_report};

/// Split an input line into (source, destination)
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let (source, destination) = line.split_once('|')?;
    Some((source.trim().to_string(), destination.trim().to_string()))
}

/// One-line description of a published snapshot
pub fn describe(snapshot: &PipelineSnapshot) -> String {
    let pair = snapshot
        .pair
        .as_ref()
        .map(|p| format!("{} → {}", p.source, p.destination))
        .unwrap_or_default();

    match snapshot.state {
        ResolutionState::Idle => "💤 Idle".to_string(),
        ResolutionState::Resolving => {
            format!("🔎 [#{}] Resolving {pair}", snapshot.generation)
        },
        ResolutionState::Routing => format!("🧭 [#{}] Routing {pair}", snapshot.generation),
        ResolutionState::Succeeded => {
            let report = snapshot
                .result
                .as_deref()
                .map(route_report)
                .unwrap_or_default();
            format!("✅ [#{}] Route found\n{report}", snapshot.generation)
        },
        ResolutionState::Failed => format!(
            "❌ [#{}] {}",
            snapshot.generation,
            snapshot.error_message().unwrap_or_default()
        ),
    }
}

/// Run the read-submit-print loop until stdin closes
///
/// With `json`, every snapshot is printed as a single-line [`MapView`].
#[allow(clippy::print_stdout)]
pub async fn run(
    pipeline: RouteResolutionPipeline,
    map: MapDisplayConfig,
    json: bool,
) -> anyhow::Result<()> {
    let pipeline = Arc::new(pipeline);
    let mut updates = pipeline.subscribe();

    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            if json {
                let view = MapView::from_snapshot(&snapshot, &map);
                match serde_json::to_string(&view) {
                    Ok(line) => println!("{line}"),
                    Err(e) => warn!(%e, "Failed to render map view"),
                }
            } else {
                println!("{}", describe(&snapshot));
            }
        }
    });

    if !json {
        println!("Enter routes as: source | destination (Ctrl-D to quit)");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut submissions = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some((source, destination)) = parse_line(&line) else {
            warn!(%line, "Expected 'source | destination'");
            continue;
        };

        let pipeline = Arc::clone(&pipeline);
        submissions.spawn(async move { pipeline.submit(&source, &destination).await });
    }

    while let Some(joined) = submissions.join_next().await {
        match joined? {
            ResolutionOutcome::Superseded => debug!("Submission superseded"),
            ResolutionOutcome::Ignored => warn!("Blank location, submission ignored"),
            ResolutionOutcome::Succeeded(_) | ResolutionOutcome::Failed(_) => {},
        }
    }

    // Closing the channel lets the printer drain the last snapshot and stop
    drop(pipeline);
    printer.await?;
    Ok(())
}
