//! Google Maps geocoding integration
//!
//! Resolves free-text addresses to coordinates and coordinates back to
//! addresses via the [Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern used by the other integration
//! crates. [`GeocodingClient`] defines the interface and is implemented by
//! [`GoogleGeocodingClient`]. URL construction and optional HMAC-SHA1 request
//! signing live in [`request`]; typed extraction of the first result lives in
//! [`response`].
//!
//! Credentials are part of [`GeocodingConfig`] and owned by each client, so
//! several clients with different credentials can coexist.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, GoogleGeocodingClient};
//!
//! let client = GoogleGeocodingClient::new(&GeocodingConfig::default())?;
//! let point = client.geocode("285 Bedford Avenue, Brooklyn, NY 11211, USA").await?;
//! let address = client.reverse_geocode(&point).await?;
//! ```

mod client;
mod config;
mod error;
pub mod request;
pub mod response;

pub use client::{GeocodingClient, GoogleGeocodingClient};
pub use config::{Credentials, GeocodingConfig};
pub use error::GeocodingError;
pub use request::{RequestBuilder, sign};
