//! Geocoder CLI
//!
//! Command-line front end for forward and reverse geocoding.

#![allow(clippy::print_stdout)]

mod cli;
mod commands;
mod config;

use clap::Parser;
use integration_geocoding::{GoogleGeocodingClient, RequestBuilder};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, log_filter_from_verbosity};
use crate::commands::CliError;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(cli.verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.overrides);
    debug!(
        base_url = %config.geocoding.base_url,
        signed = config.geocoding.credentials.is_complete(),
        "Configuration loaded"
    );

    let result = match cli.command {
        Commands::Geocode { address, json } => {
            let client = GoogleGeocodingClient::new(&config.geocoding)?;
            commands::geocode(&client, &address, json).await
        },

        Commands::Reverse { lat, lng } => {
            let client = GoogleGeocodingClient::new(&config.geocoding)?;
            commands::reverse(&client, lat, lng).await
        },

        Commands::SignUrl { params } => {
            let builder = RequestBuilder::new(
                config.geocoding.base_url.as_str(),
                config.geocoding.credentials.clone(),
            );
            commands::sign_url(&builder, &params)
        },
    };

    match result {
        Ok(output) => {
            println!("{output}");
            Ok(())
        },
        Err(e) => {
            report(&e);
            std::process::exit(e.exit_code());
        },
    }
}

fn report(err: &CliError) {
    if matches!(err, CliError::Geocoding(e) if e.is_zero_results()) {
        println!("🔍 No results found");
    } else {
        println!("❌ {err}");
    }
}
