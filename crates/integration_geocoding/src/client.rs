//! Google Maps geocoding client
//!
//! Each call builds one URL, issues one GET, reads the body completely and
//! releases the response before parsing. Clients hold no per-call state and
//! may be shared across tasks.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Point;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::request::{RequestBuilder, address_query, latlng_query, redact_signature};
use crate::response::{extract_address, extract_lat_lng};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<Point, GeocodingError>;

    /// Convert coordinates to a human-readable address
    async fn reverse_geocode(&self, point: &Point) -> Result<String, GeocodingError>;
}

/// Geocoding client for the Google Maps Geocoding API
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    client: Client,
    requests: RequestBuilder,
    timeout_secs: u64,
}

impl GoogleGeocodingClient {
    /// Create a new Google geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            requests: RequestBuilder::new(&config.base_url, config.credentials.clone()),
            timeout_secs: config.timeout_secs,
        })
    }

    /// The URL builder used by this client
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.requests
    }

    /// Issue a GET for the given provider parameters and return the raw body
    async fn fetch(&self, params: &str) -> Result<Vec<u8>, GeocodingError> {
        let url = self.requests.url(params)?;
        debug!(
            url = redact_signature(&url),
            signed = self.requests.is_signing(),
            "Sending geocoding request"
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                GeocodingError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                GeocodingError::ReadFailed(e.to_string())
            }
        })?;

        debug!(bytes = body.len(), "Received geocoding response");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Point, GeocodingError> {
        let data = self.fetch(&address_query(address)).await?;
        let (lat, lng) = extract_lat_lng(&data)?;

        debug!(%lat, %lng, "Geocoded address");
        Point::new(lat, lng).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    #[instrument(skip(self, point), fields(point = %point))]
    async fn reverse_geocode(&self, point: &Point) -> Result<String, GeocodingError> {
        let data = self.fetch(&latlng_query(point)).await?;
        let address = extract_address(&data)?;

        debug!(%address, "Reverse geocoded point");
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GeocodingConfig {
            timeout_secs: 0,
            ..GeocodingConfig::for_testing()
        };
        let err = GoogleGeocodingClient::new(&config).unwrap_err();
        assert!(matches!(err, GeocodingError::ConfigurationError(_)));
    }

    #[test]
    fn test_new_uses_configured_credentials() {
        let config = GeocodingConfig::for_testing()
            .with_credentials(Credentials::new("a2V5", "gme-acme", "web"));
        let client = GoogleGeocodingClient::new(&config).unwrap();
        assert!(client.request_builder().is_signing());
    }

    #[tokio::test]
    async fn test_invalid_api_key_fails_before_network() {
        // Port 9 (discard) is never contacted: signing fails first
        let config = GeocodingConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..GeocodingConfig::for_testing()
        }
        .with_credentials(Credentials::new("***", "gme-acme", "web"));
        let client = GoogleGeocodingClient::new(&config).unwrap();

        let err = client.geocode("Berlin").await.unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidApiKey(_)));
    }
}
