//! Bounding box of a geocoding result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::coerce_f64;

/// Rectangular geographic extent expressed as four scalar edges.
///
/// A result either carries a complete set of edges or no bounds at all;
/// partial bounds never occur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Build bounds from a raw provider value, coercing each edge to a
    /// float. Returns `None` unless the value is a mapping carrying all
    /// four edges.
    pub fn from_raw(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            south: coerce_f64(map.get("south")?),
            west: coerce_f64(map.get("west")?),
            north: coerce_f64(map.get("north")?),
            east: coerce_f64(map.get("east")?),
        })
    }

    /// JSON object view, as emitted in a result's map form.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "south": self.south,
            "west": self.west,
            "north": self.north,
            "east": self.east,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_coerces_edges() {
        let bounds = Bounds::from_raw(&json!({
            "south": 1,
            "west": "2",
            "north": 3,
            "east": 0.1,
        }))
        .unwrap();

        assert_eq!(bounds, Bounds::new(1.0, 2.0, 3.0, 0.1));
    }

    #[test]
    fn test_from_raw_requires_all_edges() {
        assert_eq!(Bounds::from_raw(&json!({"south": 1, "west": 2, "north": 3})), None);
        assert_eq!(Bounds::from_raw(&json!({})), None);
    }

    #[test]
    fn test_from_raw_rejects_non_mapping() {
        assert_eq!(Bounds::from_raw(&json!("1,2,3,4")), None);
        assert_eq!(Bounds::from_raw(&json!(null)), None);
    }

    #[test]
    fn test_to_value_shape() {
        let bounds = Bounds::new(1.0, 2.0, 3.0, 0.1);
        let value = bounds.to_value();

        assert_eq!(value["south"], json!(1.0));
        assert_eq!(value["west"], json!(2.0));
        assert_eq!(value["north"], json!(3.0));
        assert_eq!(value["east"], json!(0.1));
        assert_eq!(Bounds::from_raw(&value), Some(bounds));
    }
}
