//! Datacenter facility records and year-based visibility.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a facility.
///
/// Unexpected status strings in input data degrade to [`FacilityStatus::Unknown`]
/// rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Operational,
    Planned,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single datacenter facility as loaded from the facility table.
///
/// Identity fields are immutable for the lifetime of a session; only
/// `latitude`/`longitude` are ever rewritten, and only by
/// [`crate::spacing::space_markers`], which returns a new collection rather
/// than touching the caller's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Nameplate capacity in megawatts; absent in the source data means 0.
    #[serde(default)]
    pub capacity_mw: f64,
    /// First year the facility appears on the map.
    pub year_opened: i32,
    #[serde(default)]
    pub status: FacilityStatus,
    /// Free-text county name, joined against the utility reference table.
    #[serde(default)]
    pub county: String,
}

/// Facilities visible at the given query year (`year_opened <= year`).
pub fn visible_in_year(facilities: &[Facility], year: i32) -> Vec<Facility> {
    facilities
        .iter()
        .filter(|facility| facility.year_opened <= year)
        .cloned()
        .collect()
}
