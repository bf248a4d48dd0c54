//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The configured API key is not valid base64 and cannot be used for signing
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The geocoding service answered with a non-success HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be read completely
    #[error("Failed to read response body: {0}")]
    ReadFailed(String),

    /// The query matched no location
    #[error("ZERO_RESULTS")]
    ZeroResults,

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl GeocodingError {
    /// Returns true if the query matched no location
    #[must_use]
    pub const fn is_zero_results(&self) -> bool {
        matches!(self, Self::ZeroResults)
    }

    /// Returns true if repeating the same request might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::Timeout { .. }
                | Self::RequestFailed(_)
                | Self::ReadFailed(_)
        )
    }
}
