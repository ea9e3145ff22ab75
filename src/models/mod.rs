//! Core data models for the geocoding result.

pub mod bounds;
pub mod field;
pub mod geocoded;

pub use bounds::Bounds;
pub use field::Field;
pub use geocoded::GeocodedResult;
