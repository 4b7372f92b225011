//! Shared test fixtures for integration tests.

use dcmap::facility::{Facility, FacilityStatus};
use dcmap::geojson::FeatureCollection;
use dcmap::pricing::PricingTable;
use dcmap::utility::UtilityMapping;
use serde_json::json;

/// Reference table covering a representative slice of Virginia counties:
/// Dominion, APCo, cooperative, and municipal territory plus an independent
/// city.
pub fn sample_mapping() -> UtilityMapping {
    serde_json::from_value(json!({
        "mapping": {
            "51001": "apco",
            "51059": "dominion",
            "51107": "dominion",
            "51117": "cooperatives",
            "51195": "apco",
            "51660": "municipal"
        },
        "fips_names": {
            "51001": "Accomack County",
            "51059": "Fairfax County",
            "51107": "Loudoun County",
            "51117": "Mecklenburg County",
            "51195": "Wise County",
            "51660": "Harrisonburg city"
        }
    }))
    .unwrap()
}

/// County polygon collection with the identifier variants seen in real data:
/// top-level id, `GEOID` property, and `GEO_ID` property.
pub fn sample_counties() -> FeatureCollection {
    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "51107",
                "properties": {"NAME": "Loudoun", "ALAND": 1334000000},
                "geometry": {"type": "Polygon", "coordinates": [[[-77.6, 38.9], [-77.3, 38.9], [-77.3, 39.3], [-77.6, 38.9]]]}
            },
            {
                "type": "Feature",
                "properties": {"GEOID": "51195", "NAME": "Wise"},
                "geometry": {"type": "Polygon", "coordinates": [[[-82.8, 36.8], [-82.3, 36.8], [-82.3, 37.1], [-82.8, 36.8]]]}
            },
            {
                "type": "Feature",
                "properties": {"GEO_ID": "51660", "NAME": "Harrisonburg"},
                "geometry": {"type": "Polygon", "coordinates": [[[-78.9, 38.4], [-78.8, 38.4], [-78.8, 38.5], [-78.9, 38.4]]]}
            }
        ]
    }))
    .unwrap()
}

/// Pricing table with a state-average series and two regional series.
pub fn sample_pricing() -> PricingTable {
    serde_json::from_value(json!({
        "state_average": {
            "name": "Virginia average",
            "data": {
                "2020": {"commercial": 7.4, "residential": 11.6},
                "2025": {"commercial": 8.6, "residential": 12.9}
            }
        },
        "utilities": {
            "dominion": {"name": "Dominion Energy", "data": {"2025": {"commercial": 8.9}}},
            "apco": {"name": "Appalachian Power", "data": {"2025": {"commercial": 9.4}}}
        }
    }))
    .unwrap()
}

/// Builds a facility with the given placement and opening year.
pub fn facility(name: &str, county: &str, longitude: f64, latitude: f64, year: i32) -> Facility {
    Facility {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        latitude,
        longitude,
        capacity_mw: 60.0,
        year_opened: year,
        status: FacilityStatus::Operational,
        county: county.to_string(),
    }
}

/// Default facility roster spanning three utility regions and two decades.
pub fn sample_facilities() -> Vec<Facility> {
    vec![
        facility("Ashburn One", "Loudoun", -77.48, 39.04, 2012),
        facility("Ashburn Two", "Loudoun", -77.48, 39.04, 2019),
        facility("Fairfax Edge", "Fairfax", -77.30, 38.85, 2021),
        facility("Wise Ridge", "Wise", -82.57, 36.98, 2023),
        facility("Accomack Shore", "Accomack", -75.67, 37.72, 2020),
        facility("Boydton Campus", "Mecklenburg", -78.39, 36.67, 2027),
    ]
}
