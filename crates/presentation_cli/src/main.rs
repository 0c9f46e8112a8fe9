//! Waymark CLI
//!
//! Resolves two place names, shows the great-circle distance between them
//! and the map overlay a front end would draw.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;
mod wiring;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{LookupMode, RouteSession};
use clap::{Parser, Subcommand};
use domain::GeoPoint;
use infrastructure::{AppConfig, init_telemetry};
use tracing::info;

/// Waymark CLI
#[derive(Debug, Parser)]
#[command(name = "waymark")]
#[command(author, version, about = "Distance between two places", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./waymark.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve two places and show the distance between them
    ///
    /// Example: waymark route "New Delhi" Mumbai --swap
    Route {
        /// Start location
        from: String,

        /// Destination
        to: String,

        /// Exchange start and destination after resolving
        #[arg(long)]
        swap: bool,

        /// Look up the destination only after the start
        #[arg(long)]
        sequential: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a place name to coordinates
    Geocode {
        /// Place name
        query: String,
    },

    /// Resolve coordinates to a place name
    #[command(allow_negative_numbers = true)]
    Reverse {
        /// Latitude (-90 to 90)
        lat: f64,

        /// Longitude (-180 to 180)
        lon: f64,
    },

    /// Use this device's position as the start location
    Locate {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
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

/// Print a user-facing failure and exit non-zero
fn fail(message: &str) -> ! {
    eprintln!("❌ {message}");
    std::process::exit(1);
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    // -v wins over the configured filter
    let telemetry = if cli.verbose > 0 {
        config
            .telemetry
            .clone()
            .with_log_filter(log_filter_from_verbosity(cli.verbose))
    } else {
        config.telemetry.clone()
    };
    init_telemetry(&telemetry)?;

    info!("🧭 Waymark v{} starting...", env!("CARGO_PKG_VERSION"));

    let planner = wiring::build_planner(&config)?;
    let map_defaults = wiring::map_defaults(&config);

    match cli.command {
        Commands::Route {
            from,
            to,
            swap,
            sequential,
            json,
        } => {
            let planner = if sequential {
                planner.with_lookup_mode(LookupMode::Sequential)
            } else {
                planner
            };
            let session = RouteSession::new(Arc::new(planner)).with_map_defaults(map_defaults);

            session.set_start_input(from);
            session.set_destination_input(to);
            session.find_route().await?;

            if let Some(message) = session.state().last_error {
                fail(&message);
            }
            if swap {
                session.switch_locations();
            }

            let state = session.state();
            let map = session.map_overlay();
            if json {
                let report = render::Report::new(&state, &map);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_lines(&render::route_lines(&state, &map));
            }
        },

        Commands::Geocode { query } => match planner.resolve(&query).await {
            Ok(point) => println!("📍 {}: {point}", query.trim()),
            Err(e) => fail(&e.user_message()),
        },

        Commands::Reverse { lat, lon } => {
            let Ok(point) = GeoPoint::new(lat, lon) else {
                fail(&format!("Invalid coordinates: {lat}, {lon}"));
            };
            match planner.describe(&point).await {
                Ok(name) => println!("📍 {point}: {name}"),
                Err(e) => fail(&e.user_message()),
            }
        },

        Commands::Locate { json } => {
            let session = RouteSession::new(Arc::new(planner)).with_map_defaults(map_defaults);
            session.locate().await?;

            let state = session.state();
            if let Some(message) = &state.last_error {
                fail(message);
            }

            let map = session.map_overlay();
            if json {
                let report = render::Report::new(&state, &map);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_lines(&render::location_lines(&state, &map));
            }
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
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn reverse_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["waymark", "reverse", "-33.8688", "151.2093"]).unwrap();
        match cli.command {
            Commands::Reverse { lat, lon } => {
                assert!((lat + 33.8688).abs() < f64::EPSILON);
                assert!((lon - 151.2093).abs() < f64::EPSILON);
            },
            other => unreachable!("Expected Reverse, got {other:?}"),
        }
    }
}
