//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::Point;
use proptest::prelude::*;

// ============================================================================
// Point Property Tests
// ============================================================================

mod point_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_point(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = Point::new(lat, lon);
            prop_assert!(result.is_ok());

            let point = result.unwrap();
            prop_assert!((point.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((point.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(Point::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(Point::new(lat, lon).is_err());
        }

        #[test]
        fn display_parses_back_within_tolerance(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let point = Point::new(lat, lon).unwrap();
            let rendered = point.to_string();
            let (lat_str, lon_str) = rendered.split_once(',').unwrap();
            let lat_back: f64 = lat_str.parse().unwrap();
            let lon_back: f64 = lon_str.parse().unwrap();
            // Six decimals round to within half a micro-degree
            prop_assert!((lat_back - lat).abs() <= 1e-6);
            prop_assert!((lon_back - lon).abs() <= 1e-6);
        }

        #[test]
        fn serialization_roundtrip(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let point = Point::new(lat, lon).unwrap();
            let json = serde_json::to_string(&point).unwrap();
            let deserialized: Point = serde_json::from_str(&json).unwrap();
            let lat_diff = (point.latitude() - deserialized.latitude()).abs();
            let lon_diff = (point.longitude() - deserialized.longitude()).abs();
            prop_assert!(lat_diff < 1e-10, "Latitude difference too large: {}", lat_diff);
            prop_assert!(lon_diff < 1e-10, "Longitude difference too large: {}", lon_diff);
        }
    }
}
