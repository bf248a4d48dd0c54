//! Request URL construction and signing
//!
//! Every request targets `/maps/api/geocode/json?sensor=false&<params>`.
//! With complete [`Credentials`] the path gains `client` and `channel`
//! parameters followed by an HMAC-SHA1 `signature` over everything before it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use domain::value_objects::Point;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::form_urlencoded;

use crate::config::Credentials;
use crate::error::GeocodingError;

type HmacSha1 = Hmac<Sha1>;

/// Path of the JSON geocoding endpoint
pub const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Builds (and, when configured, signs) request URLs
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    credentials: Credentials,
}

impl RequestBuilder {
    /// Create a builder for the given host and credentials
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            credentials,
        }
    }

    /// Build the path and query string for the given provider parameters
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::InvalidApiKey`] if signing is enabled and the
    /// API key is not valid base64.
    pub fn path_and_query(&self, params: &str) -> Result<String, GeocodingError> {
        let mut path = format!("{GEOCODE_PATH}?sensor=false&{params}");

        if let Some((api_key, client_id, channel)) = self.credentials.signing_parts() {
            path.push_str(&format!("&client={client_id}&channel={channel}"));
            let signature = sign(&path, api_key)?;
            path.push_str(&format!("&signature={signature}"));
        }

        Ok(path)
    }

    /// Build the full request URL for the given provider parameters
    ///
    /// # Errors
    ///
    /// See [`RequestBuilder::path_and_query`].
    pub fn url(&self, params: &str) -> Result<String, GeocodingError> {
        Ok(format!("{}{}", self.base_url, self.path_and_query(params)?))
    }

    /// Whether built requests carry a signature
    #[must_use]
    pub fn is_signing(&self) -> bool {
        self.credentials.is_complete()
    }
}

/// Compute the request signature for a path
///
/// The key is the base64-decoded API key; the digest is returned base64-encoded.
///
/// # Errors
///
/// Returns [`GeocodingError::InvalidApiKey`] if `api_key` is not valid base64.
pub fn sign(path: &str, api_key: &str) -> Result<String, GeocodingError> {
    let key = STANDARD
        .decode(api_key)
        .map_err(|e| GeocodingError::InvalidApiKey(e.to_string()))?;

    let mut mac = HmacSha1::new_from_slice(&key)
        .map_err(|e| GeocodingError::InvalidApiKey(e.to_string()))?;
    mac.update(path.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Forward geocoding parameter: `address=<form-urlencoded address>`
#[must_use]
pub fn address_query(address: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
    format!("address={escaped}")
}

/// Reverse geocoding parameter: `latlng=<lat>,<lng>` with six decimals
#[must_use]
pub fn latlng_query(point: &Point) -> String {
    format!("latlng={point}")
}

/// Strip the signature from a URL so it can be logged
#[must_use]
pub fn redact_signature(url: &str) -> &str {
    url.split_once("&signature=").map_or(url, |(head, _)| head)
}
