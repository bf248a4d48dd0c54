//! Command-line argument definitions

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;

/// Geocoder CLI
#[derive(Debug, Parser)]
#[command(name = "geocoder-cli")]
#[command(author, version, about = "Forward and reverse geocoding from the command line", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./geocoder.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings that take precedence over the configuration file and environment
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Geocoding API host
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Base64-encoded signing key
    #[arg(
        long,
        env = "GEOCODER_API_KEY",
        global = true,
        hide_env_values = true,
        value_parser = parse_secret
    )]
    pub api_key: Option<SecretString>,

    /// Client identifier for signed requests
    #[arg(long, env = "GEOCODER_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// Channel identifier for signed requests
    #[arg(long, env = "GEOCODER_CHANNEL", global = true)]
    pub channel: Option<String>,
}

fn parse_secret(value: &str) -> Result<SecretString, Infallible> {
    Ok(SecretString::from(value))
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve an address to coordinates
    ///
    /// Example: geocoder-cli geocode "285 Bedford Avenue, Brooklyn, NY 11211, USA"
    Geocode {
        /// Free-text address
        address: String,

        /// Print the point as JSON instead of `lat,lng`
        #[arg(long)]
        json: bool,
    },

    /// Resolve coordinates to an address
    ///
    /// Example: geocoder-cli reverse 40.714224 -73.961452
    Reverse {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// Print the request URL for raw provider parameters without sending it
    ///
    /// Example: geocoder-cli sign-url "address=New+York"
    SignUrl {
        /// Provider parameters, e.g. `address=...` or `latlng=...`
        params: String,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
