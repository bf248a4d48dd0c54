//! Geocoding service configuration

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Credentials for signed (premium tier) requests
///
/// Signing is enabled only when all three values are present and non-empty.
/// Each client owns its own copy, so clients with different credentials can
/// run side by side.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Base64-encoded signing key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Client identifier (e.g. `gme-yourcompany`)
    #[serde(default)]
    pub client_id: Option<String>,

    /// Channel identifier used for usage reporting
    #[serde(default)]
    pub channel: Option<String>,
}

impl Credentials {
    /// Create a complete set of credentials
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            client_id: Some(client_id.into()),
            channel: Some(channel.into()),
        }
    }

    /// Returns `(api_key, client_id, channel)` when every value is present
    #[must_use]
    pub fn signing_parts(&self) -> Option<(&str, &str, &str)> {
        let api_key = non_empty(self.api_key.as_ref().map(|key| key.expose_secret()))?;
        let client_id = non_empty(self.client_id.as_deref())?;
        let channel = non_empty(self.channel.as_deref())?;
        Some((api_key, client_id, channel))
    }

    /// Check whether requests will be signed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.signing_parts().is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("client_id", &self.client_id)
            .field("channel", &self.channel)
            .finish()
    }
}

/// Configuration for the geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Scheme and host of the geocoding API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional signing credentials
    #[serde(default)]
    pub credentials: Credentials,
}

fn default_base_url() -> String {
    "http://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            credentials: Credentials::default(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Replace the signing credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
