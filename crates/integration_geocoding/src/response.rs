//! Provider response parsing
//!
//! Only the first entry of `results` is decoded; later entries are kept as
//! raw JSON and never inspected, so a malformed trailing result cannot fail
//! an otherwise usable response.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::GeocodingError;

/// Top-level geocoding response
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
    status: Option<String>,
    error_message: Option<String>,
}

/// First result of a forward geocoding response
#[derive(Debug, Deserialize)]
struct ForwardResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// First result of a reverse geocoding response
#[derive(Debug, Deserialize)]
struct ReverseResult {
    formatted_address: String,
}

/// Extract the first `(lat, lng)` pair from a forward geocoding response
///
/// # Errors
///
/// - [`GeocodingError::ParseError`] if the body is not JSON, or the first
///   result lacks a numeric `geometry.location.lat`/`lng`
/// - [`GeocodingError::ZeroResults`] if `results` is empty, null or absent
pub fn extract_lat_lng(data: &[u8]) -> Result<(f64, f64), GeocodingError> {
    let result: ForwardResult = first_result(data)?;
    let LatLng { lat, lng } = result.geometry.location;
    Ok((lat, lng))
}

/// Extract the first formatted address from a reverse geocoding response
///
/// # Errors
///
/// - [`GeocodingError::ParseError`] if the body is not JSON, or the first
///   result lacks a string `formatted_address`
/// - [`GeocodingError::ZeroResults`] if `results` is empty, null or absent
pub fn extract_address(data: &[u8]) -> Result<String, GeocodingError> {
    let result: ReverseResult = first_result(data)?;
    Ok(result.formatted_address)
}

fn first_result<T: DeserializeOwned>(data: &[u8]) -> Result<T, GeocodingError> {
    let response: GeocodeResponse = serde_json::from_slice(data)
        .map_err(|e| GeocodingError::ParseError(format!("Invalid response body: {e}")))?;

    log_provider_status(&response);

    let first = response
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(GeocodingError::ZeroResults)?;

    serde_json::from_value(first)
        .map_err(|e| GeocodingError::ParseError(format!("Invalid first result: {e}")))
}

fn log_provider_status(response: &GeocodeResponse) {
    match response.status.as_deref() {
        None | Some("OK" | "ZERO_RESULTS") => {},
        Some(status) => warn!(
            %status,
            error_message = response.error_message.as_deref().unwrap_or_default(),
            "Geocoding provider reported an error status"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOCODE_SUCCESS: &str = include_str!("../tests/data/google_geocode_success.json");
    const GEOCODE_ZERO_RESULTS: &str =
        include_str!("../tests/data/google_geocode_zero_results.json");
    const REVERSE_SUCCESS: &str = include_str!("../tests/data/google_reverse_geocode_success.json");
    const REQUEST_DENIED: &str = include_str!("../tests/data/google_request_denied.json");

    #[test]
    fn test_extract_lat_lng() {
        let (lat, lng) = extract_lat_lng(GEOCODE_SUCCESS.as_bytes()).unwrap();
        assert!((lat - 37.615_223).abs() < f64::EPSILON);
        assert!((lng + 122.389_979).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_lat_lng_zero_results() {
        let err = extract_lat_lng(GEOCODE_ZERO_RESULTS.as_bytes()).unwrap_err();
        assert!(err.is_zero_results());
    }

    #[test]
    fn test_extract_lat_lng_missing_results_key() {
        let err = extract_lat_lng(br#"{"status": "ZERO_RESULTS"}"#).unwrap_err();
        assert!(err.is_zero_results());
    }

    #[test]
    fn test_null_results_is_zero_results() {
        let body = br#"{"results": null, "status": "ZERO_RESULTS"}"#;
        assert!(extract_lat_lng(body).unwrap_err().is_zero_results());
        assert!(extract_address(body).unwrap_err().is_zero_results());
    }

    #[test]
    fn test_extract_lat_lng_request_denied_has_no_results() {
        let err = extract_lat_lng(REQUEST_DENIED.as_bytes()).unwrap_err();
        assert!(err.is_zero_results());
    }

    #[test]
    fn test_extract_lat_lng_malformed_json() {
        let err = extract_lat_lng(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_extract_lat_lng_mistyped_coordinate() {
        let body = br#"{"results": [{"geometry": {"location": {"lat": "37.6", "lng": -122.3}}}]}"#;
        let err = extract_lat_lng(body).unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_extract_lat_lng_missing_geometry() {
        let body = br#"{"results": [{"formatted_address": "Somewhere"}]}"#;
        let err = extract_lat_lng(body).unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_extract_lat_lng_ignores_later_results() {
        let body = br#"{"results": [
            {"geometry": {"location": {"lat": 1.5, "lng": 2.5}}},
            {"geometry": "garbage"}
        ]}"#;
        assert_eq!(extract_lat_lng(body).unwrap(), (1.5, 2.5));
    }

    #[test]
    fn test_extract_address() {
        let address = extract_address(REVERSE_SUCCESS.as_bytes()).unwrap();
        assert_eq!(address, "285 Bedford Avenue, Brooklyn, NY 11211, USA");
    }

    #[test]
    fn test_extract_address_zero_results() {
        let err = extract_address(GEOCODE_ZERO_RESULTS.as_bytes()).unwrap_err();
        assert!(err.is_zero_results());
    }

    #[test]
    fn test_extract_address_missing_field() {
        let body = br#"{"results": [{"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}]}"#;
        let err = extract_address(body).unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_extract_address_malformed_json() {
        let err = extract_address(b"").unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }
}
