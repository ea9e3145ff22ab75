//! Tamarack - canonical geocoding result model
//!
//! This library provides the normalized result record that provider
//! response parsers populate and callers read back, either through named
//! accessors or through case-insensitive key access.

pub mod models;
pub mod normalize;

pub use models::{Bounds, Field, GeocodedResult};
