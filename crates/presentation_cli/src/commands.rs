//! Subcommand handlers
//!
//! Handlers return the text to print so they can be exercised without a
//! terminal or a live provider.

use domain::{DomainError, Point};
use integration_geocoding::{GeocodingClient, GeocodingError, RequestBuilder};
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding failed
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    /// Output could not be rendered
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    ///
    /// Zero results get their own code so scripts can tell "no match"
    /// apart from failures.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Geocoding(GeocodingError::ZeroResults) => 2,
            _ => 1,
        }
    }
}

/// Resolve an address and render the point
pub async fn geocode(
    client: &dyn GeocodingClient,
    address: &str,
    as_json: bool,
) -> Result<String, CliError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(DomainError::ValidationError("address must not be empty".to_string()).into());
    }

    let point = client.geocode(address).await?;

    if as_json {
        Ok(serde_json::to_string_pretty(&point)?)
    } else {
        Ok(point.to_string())
    }
}

/// Resolve coordinates to the first matching address
pub async fn reverse(client: &dyn GeocodingClient, lat: f64, lng: f64) -> Result<String, CliError> {
    let point = Point::new(lat, lng).map_err(DomainError::from)?;
    Ok(client.reverse_geocode(&point).await?)
}

/// Render the request URL for raw provider parameters
pub fn sign_url(builder: &RequestBuilder, params: &str) -> Result<String, CliError> {
    Ok(builder.url(params)?)
}
