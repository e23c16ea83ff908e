//! Command-line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SmartWeather binary sensor CLI
#[derive(Debug, Parser)]
#[command(name = "smartweather-cli")]
#[command(author, version, about = "SmartWeather binary sensor host", long_about = None)]
pub struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: ./smartweather.toml if present)
    #[arg(short, long, env = "SMARTWEATHER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the supported conditions and their display metadata
    Conditions,

    /// Refresh once and print every sensor's state as JSON
    Status {
        /// Observation file (overrides `observation.path`)
        #[arg(short, long)]
        observation: Option<PathBuf>,
    },

    /// Refresh periodically and print state changes
    ///
    /// Example: smartweather-cli watch --observation ./obs.json --interval 30
    Watch {
        /// Observation file (overrides `observation.path`)
        #[arg(short, long)]
        observation: Option<PathBuf>,

        /// Seconds between refresh cycles (default: `binary_sensor.scan_interval_secs`)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many cycles (default: run until interrupted)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        cycles: Option<u64>,
    },
}

/// Determine log filter level from verbosity count
///
/// Zero keeps the configured filter.
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
