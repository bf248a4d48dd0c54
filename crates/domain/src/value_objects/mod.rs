//! Value Objects - Immutable, identity-less domain primitives

mod point;

pub use point::{InvalidCoordinates, Point};
