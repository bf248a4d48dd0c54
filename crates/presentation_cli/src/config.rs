//! Layered CLI configuration
//!
//! Sources, lowest precedence first: built-in defaults, the configuration
//! file, `GEOCODER_*` environment variables (`__` separates nested keys, e.g.
//! `GEOCODER_GEOCODING__TIMEOUT_SECS`), then command-line flags.

use std::path::Path;

use integration_geocoding::GeocodingConfig;
use serde::Deserialize;

use crate::cli::Overrides;

/// Root of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Geocoding provider settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

impl AppConfig {
    /// Load configuration from environment and an optional file
    ///
    /// An explicit `path` must exist; without one, `geocoder.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = GeocodingConfig::default();
        let builder = config::Config::builder()
            .set_default("geocoding.base_url", defaults.base_url)?
            .set_default("geocoding.timeout_secs", defaults.timeout_secs)?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("geocoder").required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix("GEOCODER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Apply command-line overrides on top of the loaded configuration
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        let geocoding = &mut self.geocoding;

        if let Some(base_url) = overrides.base_url {
            geocoding.base_url = base_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            geocoding.timeout_secs = timeout_secs;
        }
        if overrides.api_key.is_some() {
            geocoding.credentials.api_key = overrides.api_key;
        }
        if overrides.client_id.is_some() {
            geocoding.credentials.client_id = overrides.client_id;
        }
        if overrides.channel.is_some() {
            geocoding.credentials.channel = overrides.channel;
        }

        self
    }
}
