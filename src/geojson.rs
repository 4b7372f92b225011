//! GeoJSON-like feature collections with open-ended property bags.
//!
//! The core never interprets geometry; it is carried through enrichment as an
//! opaque value so the display layer gets back exactly what the loader fed in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single geographic feature: optional identifier, property bag, and opaque
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    /// GeoJSON allows string or numeric feature ids; both are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
}

/// A collection of features. Top-level members beyond `type` and `features`
/// (e.g. `bbox`, `crs`) are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl Feature {
    /// Resolves the feature's join identifier: top-level `id`, else the
    /// `GEOID` property, else the `GEO_ID` property. First non-empty wins;
    /// `None` when no candidate yields one.
    pub fn identifier(&self) -> Option<String> {
        if let Some(id) = value_as_identifier(self.id.as_ref()) {
            return Some(id);
        }
        for key in ["GEOID", "GEO_ID"] {
            if let Some(id) = value_as_identifier(self.properties.get(key)) {
                return Some(id);
            }
        }
        None
    }

    /// The feature's own `NAME` property, if present and a string.
    pub fn name_property(&self) -> Option<&str> {
        self.properties.get("NAME").and_then(Value::as_str)
    }
}

/// Coerces a JSON value to an identifier string. Empty strings count as
/// absent, matching the loader's conventions for sparse datasets.
fn value_as_identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
