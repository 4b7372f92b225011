//! County-to-utility enrichment join over polygon collections.

use serde_json::Value;

use crate::geojson::{Feature, FeatureCollection};
use crate::utility::{DEFAULT_UTILITY, UtilityMapping, UtilityResolver};

/// Display name applied when neither the reference table nor the feature
/// itself names the county.
pub const UNKNOWN_COUNTY_NAME: &str = "Unknown";

/// Joins a county polygon collection against the utility reference table.
///
/// Every feature in the returned collection gains three derived properties:
/// `utility` (the region key), `county_name` (reference-table name, else the
/// feature's `NAME`, else [`UNKNOWN_COUNTY_NAME`]), and `fips` (the resolved
/// identifier, empty when the feature has none). All original properties and
/// collection-level members are preserved; the input is never mutated.
///
/// Enrichment cannot fail: features without a resolvable identifier are
/// attributed to the default utility region rather than rejected, so partial
/// datasets still render.
pub fn enrich_counties(counties: &FeatureCollection, mapping: &UtilityMapping) -> FeatureCollection {
    let resolver = UtilityResolver::new(mapping);
    FeatureCollection {
        kind: counties.kind.clone(),
        features: counties
            .features
            .iter()
            .map(|feature| enrich_feature(feature, &resolver))
            .collect(),
        extra: counties.extra.clone(),
    }
}

fn enrich_feature(feature: &Feature, resolver: &UtilityResolver<'_>) -> Feature {
    let fips = feature.identifier();
    let utility = match fips.as_deref() {
        Some(fips) => resolver.by_fips(fips),
        None => DEFAULT_UTILITY,
    };
    let county_name = fips
        .as_deref()
        .and_then(|fips| resolver.display_name(fips))
        .or_else(|| feature.name_property())
        .unwrap_or(UNKNOWN_COUNTY_NAME)
        .to_string();

    let mut enriched = feature.clone();
    enriched
        .properties
        .insert("utility".to_string(), Value::String(utility.as_key().to_string()));
    enriched
        .properties
        .insert("county_name".to_string(), Value::String(county_name));
    enriched
        .properties
        .insert("fips".to_string(), Value::String(fips.unwrap_or_default()));
    enriched
}
