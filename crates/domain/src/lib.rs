//! Domain layer for the geocoder
//!
//! Contains the coordinate value object and domain errors shared by the
//! provider integration and the CLI. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
