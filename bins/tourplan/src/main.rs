//! tourplan: order selected places into a visiting route.
//!
//! Reads catalog listings (attractions, restaurants, menu-linked restaurants),
//! orders them by nearest neighbour from the traveller's position, and prints
//! the route with an approximate total distance and duration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tourplan_cli::output::Status;
use tourplan_core::config::Config;
use tourplan_telemetry::TelemetryConfig;

mod commands;
mod settings;

use commands::{config, distance, nearby, plan};

/// Custom tour planner
#[derive(Parser)]
#[command(name = "tourplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Path to a tourplan.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order the places in a catalog file into a route
    Plan {
        /// JSON array of catalog items
        #[arg(short, long)]
        places: PathBuf,

        /// Current latitude (fallback origin is used when omitted)
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Current longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Duration language (th, en); overrides the configuration
        #[arg(short, long)]
        locale: Option<String>,

        /// Print the route as a GeoJSON map overlay
        #[arg(long)]
        geojson: bool,
    },

    /// List catalog places by distance from a position
    Nearby {
        /// JSON array of catalog items
        #[arg(short, long)]
        places: PathBuf,

        /// Current latitude (fallback origin is used when omitted)
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Current longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Only list places within this many kilometers
        #[arg(short, long)]
        radius: Option<f64>,

        /// Maximum number of places to list
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Great-circle distance between two coordinates
    #[command(allow_negative_numbers = true)]
    Distance {
        lat1: f64,
        lng1: f64,
        lat2: f64,
        lng2: f64,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let json = cli.format == "json";

    // In JSON mode stderr carries only the error report
    let telemetry = if cli.verbose {
        tourplan_telemetry::init_with_config(TelemetryConfig::verbose())
    } else if json {
        tourplan_telemetry::init_with_config(TelemetryConfig::quiet())
    } else {
        tourplan_telemetry::init()
    };
    if let Err(e) = telemetry {
        Status::warning(&e.to_string());
    }

    let result = Config::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| run(cli.command, &config, json));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(e, json),
    }
}

fn run(command: Commands, config: &Config, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Plan { places, lat, lng, locale, geojson } => {
            let position = settings::position(lat, lng);
            plan::run(config, &places, position, locale.as_deref(), geojson, json)
        }

        Commands::Nearby { places, lat, lng, radius, limit } => {
            let position = settings::position(lat, lng);
            nearby::run(config, &places, position, radius, limit, json)
        }

        Commands::Distance { lat1, lng1, lat2, lng2 } => distance::run(lat1, lng1, lat2, lng2, json),

        Commands::Config => config::run(config, json),
    }
}

fn report_error(error: anyhow::Error, json: bool) -> ExitCode {
    let err = match error.downcast::<tourplan_core::Error>() {
        Ok(err) => err,
        Err(other) => tourplan_core::Error::new(tourplan_core::ErrorCode::Internal, format!("{other:#}")),
    };

    if json {
        match serde_json::to_string_pretty(&err.to_report()) {
            Ok(report) => eprintln!("{report}"),
            Err(_) => eprintln!("{err}"),
        }
    } else {
        Status::error(&err.to_string());
    }

    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
