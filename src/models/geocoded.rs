//! The canonical geocoding result record.

use std::collections::HashSet;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{Bounds, Field};
use crate::normalize::{coerce_f64, title_case};

/// A single normalized geocoding result.
///
/// Upstream provider parsers hand this record a raw, loosely-typed mapping
/// (`populate_from`); the record coerces it into one canonical shape and
/// exposes it through named accessors, a normalized map view (`to_map`),
/// and a case-insensitive key adapter (`get`/`set`/`unset`/`contains`).
///
/// Malformed input degrades to field defaults instead of failing: a
/// partially populated result is still useful to the caller.
#[derive(Debug, Clone, Default)]
pub struct GeocodedResult {
    latitude: f64,
    longitude: f64,
    bounds: Option<Bounds>,
    city: String,
    zipcode: String,
    region: String,
    region_code: String,
    country: String,
    /// Fields explicitly assigned so far; backs `contains`.
    assigned: HashSet<Field>,
}

impl GeocodedResult {
    /// Create an empty result with all fields at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a result directly from a raw provider mapping.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut result = Self::default();
        result.populate_from(raw);
        result
    }

    /// Bulk-populate fields from a raw provider mapping.
    ///
    /// Only the keys present in `raw` are overwritten, so repeated calls
    /// merge; keys are matched case-sensitively against the canonical
    /// names and unrecognized keys are skipped.
    pub fn populate_from(&mut self, raw: &Map<String, Value>) {
        for (key, value) in raw {
            match Field::from_canonical_key(key) {
                Some(field) => self.assign(field, value),
                None => debug!("ignoring unrecognized result key: {}", key),
            }
        }
    }

    /// Store a raw value into a field, applying that field's normalization.
    fn assign(&mut self, field: Field, value: &Value) {
        match field {
            Field::Latitude => self.latitude = coerce_f64(value),
            Field::Longitude => self.longitude = coerce_f64(value),
            Field::Bounds => match Bounds::from_raw(value) {
                Some(bounds) => self.bounds = Some(bounds),
                None => {
                    // Bounds are all-or-nothing; keep whatever was there.
                    warn!("discarding incomplete bounds value");
                    return;
                }
            },
            Field::City => self.city = title_case(coerce_str(value)),
            Field::Zipcode => self.zipcode = coerce_str(value).to_string(),
            Field::Region => self.region = title_case(coerce_str(value)),
            Field::RegionCode => self.region_code = coerce_str(value).to_string(),
            Field::Country => self.country = title_case(coerce_str(value)),
        }
        self.assigned.insert(field);
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: f64) {
        self.latitude = latitude;
        self.assigned.insert(Field::Latitude);
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: f64) {
        self.longitude = longitude;
        self.assigned.insert(Field::Longitude);
    }

    /// Bounding box, if one was ever supplied.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.assigned.insert(Field::Bounds);
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Set the city name; title-cased like ingestion so direct mutation
    /// stays normalized.
    pub fn set_city(&mut self, city: &str) {
        self.city = title_case(city);
        self.assigned.insert(Field::City);
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    /// Set the zipcode, stored verbatim.
    pub fn set_zipcode(&mut self, zipcode: &str) {
        self.zipcode = zipcode.to_string();
        self.assigned.insert(Field::Zipcode);
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn set_region(&mut self, region: &str) {
        self.region = title_case(region);
        self.assigned.insert(Field::Region);
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Set the region code, stored verbatim ("FOO" stays "FOO").
    pub fn set_region_code(&mut self, region_code: &str) {
        self.region_code = region_code.to_string();
        self.assigned.insert(Field::RegionCode);
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_country(&mut self, country: &str) {
        self.country = title_case(country);
        self.assigned.insert(Field::Country);
    }

    /// Map view with the 8 canonical keys, populated from the normalized
    /// getters. `bounds` holds either the 4-entry object or null.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for field in Field::all() {
            map.insert(field.key_name().to_string(), self.value_of(*field));
        }
        map
    }

    /// Serialize to a JSON string of the canonical map view.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_map())
    }

    /// Case-insensitive read. Recognized keys yield the same value the
    /// named getter reports (with absent bounds surfacing as null);
    /// unrecognized keys yield `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        Field::from_key(key).map(|field| self.value_of(field))
    }

    /// Case-insensitive write, equivalent in effect to the named setter
    /// for the matching field. Unrecognized keys are ignored.
    pub fn set(&mut self, key: &str, value: Value) {
        match Field::from_key(key) {
            Some(field) => self.assign(field, &value),
            None => debug!("ignoring set for unrecognized result key: {}", key),
        }
    }

    /// Reset a field to its default and clear its assignment flag.
    /// Unrecognized keys are ignored.
    pub fn unset(&mut self, key: &str) {
        let Some(field) = Field::from_key(key) else {
            return;
        };
        match field {
            Field::Latitude => self.latitude = 0.0,
            Field::Longitude => self.longitude = 0.0,
            Field::Bounds => self.bounds = None,
            Field::City => self.city.clear(),
            Field::Zipcode => self.zipcode.clear(),
            Field::Region => self.region.clear(),
            Field::RegionCode => self.region_code.clear(),
            Field::Country => self.country.clear(),
        }
        self.assigned.remove(&field);
    }

    /// Whether a field has been explicitly assigned (by ingestion, a named
    /// setter, or `set`) and not unset since. A field holding its default
    /// because it was never supplied reports false.
    pub fn contains(&self, key: &str) -> bool {
        Field::from_key(key).is_some_and(|field| self.assigned.contains(&field))
    }

    fn value_of(&self, field: Field) -> Value {
        match field {
            Field::Latitude => Value::from(self.latitude),
            Field::Longitude => Value::from(self.longitude),
            Field::Bounds => match &self.bounds {
                Some(bounds) => bounds.to_value(),
                None => Value::Null,
            },
            Field::City => Value::from(self.city.as_str()),
            Field::Zipcode => Value::from(self.zipcode.as_str()),
            Field::Region => Value::from(self.region.as_str()),
            Field::RegionCode => Value::from(self.region_code.as_str()),
            Field::Country => Value::from(self.country.as_str()),
        }
    }
}

impl Serialize for GeocodedResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

fn coerce_str(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}
