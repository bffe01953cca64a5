//! Domain layer for the geocoding client
//!
//! Contains value objects shared by the integration crates.
//! This layer performs no I/O and holds no provider-specific types.

pub mod value_objects;

pub use value_objects::{Coordinate, InvalidCoordinates};
