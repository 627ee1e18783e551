//! Route Explorer CLI
//!
//! Resolves driving routes between two place names and prints the summary,
//! travel alternatives and map view.

#![allow(clippy::print_stdout)]

mod interactive;
mod view;

use std::path::PathBuf;

use anyhow::{Context, bail};
use application::ResolutionOutcome;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, build_pipeline};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::view::{MapView, route_report};

/// Route Explorer CLI
#[derive(Parser)]
#[command(name = "route-explorer")]
#[command(author, version, about = "Driving routes between two places", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./route-explorer.toml if present)
    #[arg(short, long, env = "ROUTE_EXPLORER_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one route
    ///
    /// Example: route-explorer route "San Francisco, CA" "Los Angeles, CA"
    Route {
        /// Start location
        source: String,

        /// End location
        destination: String,

        /// Print the map view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read "source | destination" lines from stdin, newest line wins
    Interactive {
        /// Print every published state as a JSON map view
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Route {
            source,
            destination,
            json,
        } => {
            let pipeline = build_pipeline(&config)?;

            match pipeline.submit(&source, &destination).await {
                ResolutionOutcome::Succeeded(result) => {
                    if json {
                        let view = MapView::for_route(&result, &config.map);
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        println!("{}", route_report(&result));
                    }
                },
                ResolutionOutcome::Failed(err) => bail!("❌ {err}"),
                ResolutionOutcome::Ignored => {
                    bail!("Source and destination must not be blank");
                },
                ResolutionOutcome::Superseded => bail!("Route request was superseded"),
            }
        },

        Commands::Interactive { json } => {
            let pipeline = build_pipeline(&config)?;
            interactive::run(pipeline, config.map, json).await?;
        },

        Commands::Config => {
            print!("{}", config.to_toml()?);
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_parses_route() {
        let cli = Cli::try_parse_from([
            "route-explorer",
            "-vv",
            "route",
            "San Francisco, CA",
            "Los Angeles, CA",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Route {
                source,
                destination,
                json,
            } => {
                assert_eq!(source, "San Francisco, CA");
                assert_eq!(destination, "Los Angeles, CA");
                assert!(json);
            },
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn cli_parses_config_path_after_subcommand() {
        let cli =
            Cli::try_parse_from(["route-explorer", "config", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn cli_requires_both_locations() {
        assert!(Cli::try_parse_from(["route-explorer", "route", "Paris"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
