//! Electricity price series by utility region, and per-year summary stats.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::facility::{Facility, FacilityStatus};
use crate::utility::UtilityKey;

/// Customer sector a price applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    #[default]
    Commercial,
    Industrial,
    Residential,
}

/// Retail prices for one year, in cents per kWh. Sectors missing from the
/// source data stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SectorPrices {
    pub commercial: Option<f64>,
    pub industrial: Option<f64>,
    pub residential: Option<f64>,
}

impl SectorPrices {
    /// Price for one sector, if recorded.
    pub fn price(&self, sector: Sector) -> Option<f64> {
        match sector {
            Sector::Commercial => self.commercial,
            Sector::Industrial => self.industrial,
            Sector::Residential => self.residential,
        }
    }
}

/// A yearly price series for one provider (or the state average).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PriceSeries {
    #[serde(default)]
    pub name: Option<String>,
    /// Prices keyed by calendar year.
    #[serde(default)]
    pub data: BTreeMap<i32, SectorPrices>,
}

/// Static pricing reference table, loaded once per session.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PricingTable {
    /// Statewide average series, used for the headline summary figure.
    #[serde(default)]
    pub state_average: Option<PriceSeries>,
    /// Per-utility-region series.
    #[serde(default)]
    pub utilities: HashMap<UtilityKey, PriceSeries>,
}

/// Looks up the price for one utility region, year, and sector.
///
/// Any missing link in the chain (unknown region series, unrecorded year,
/// unrecorded sector) yields `None`; pricing gaps are expected in the source
/// data and never an error.
pub fn utility_price(
    pricing: &PricingTable,
    utility: UtilityKey,
    year: i32,
    sector: Sector,
) -> Option<f64> {
    pricing
        .utilities
        .get(&utility)?
        .data
        .get(&year)?
        .price(sector)
}

/// Headline figures for one query year, ready for the summary panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Facilities visible at the query year.
    pub total_facilities: usize,
    /// Combined nameplate capacity of visible facilities, in megawatts.
    pub total_capacity_mw: f64,
    /// Visible facilities currently operational.
    pub operational_count: usize,
    /// State-average commercial price for the year, cents per kWh.
    pub avg_price_cents_kwh: Option<f64>,
}

impl SummaryStats {
    /// Computes summary figures over the facilities visible at `year`.
    ///
    /// The price figure comes from the pricing table's state-average series
    /// and is `None` when the table is absent or has no entry for the year.
    pub fn for_year(facilities: &[Facility], pricing: Option<&PricingTable>, year: i32) -> Self {
        let mut total_facilities = 0;
        let mut total_capacity_mw = 0.0;
        let mut operational_count = 0;
        for facility in facilities {
            if facility.year_opened > year {
                continue;
            }
            total_facilities += 1;
            total_capacity_mw += facility.capacity_mw;
            if facility.status == FacilityStatus::Operational {
                operational_count += 1;
            }
        }

        let avg_price_cents_kwh = pricing
            .and_then(|table| table.state_average.as_ref())
            .and_then(|series| series.data.get(&year))
            .and_then(|prices| prices.price(Sector::Commercial));

        Self {
            total_facilities,
            total_capacity_mw,
            operational_count,
            avg_price_cents_kwh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PricingTable, Sector, SummaryStats, utility_price};
    use crate::facility::{Facility, FacilityStatus};
    use crate::utility::UtilityKey;
    use serde_json::json;

    fn sample_pricing() -> PricingTable {
        serde_json::from_value(json!({
            "state_average": {
                "name": "Virginia average",
                "data": {
                    "2024": {"commercial": 8.1, "residential": 12.4},
                    "2025": {"commercial": 8.6}
                }
            },
            "utilities": {
                "dominion": {
                    "name": "Dominion Energy",
                    "data": {"2025": {"commercial": 8.9, "industrial": 6.2}}
                },
                "apco": {
                    "data": {"2025": {"commercial": 9.4}}
                }
            }
        }))
        .unwrap()
    }

    fn facility(status: FacilityStatus, capacity_mw: f64, year_opened: i32) -> Facility {
        Facility {
            id: format!("dc-{year_opened}"),
            name: "Test DC".to_string(),
            latitude: 37.0,
            longitude: -78.0,
            capacity_mw,
            year_opened,
            status,
            county: "Henrico".to_string(),
        }
    }

    #[test]
    fn price_lookup_hits_recorded_values() {
        let pricing = sample_pricing();
        assert_eq!(
            utility_price(&pricing, UtilityKey::Dominion, 2025, Sector::Commercial),
            Some(8.9)
        );
        assert_eq!(
            utility_price(&pricing, UtilityKey::Apco, 2025, Sector::Commercial),
            Some(9.4)
        );
    }

    #[test]
    fn price_lookup_returns_none_for_any_missing_link() {
        let pricing = sample_pricing();
        // No series for the region at all.
        assert_eq!(
            utility_price(&pricing, UtilityKey::Municipal, 2025, Sector::Commercial),
            None
        );
        // Series present, year missing.
        assert_eq!(
            utility_price(&pricing, UtilityKey::Dominion, 1999, Sector::Commercial),
            None
        );
        // Year present, sector unrecorded.
        assert_eq!(
            utility_price(&pricing, UtilityKey::Apco, 2025, Sector::Industrial),
            None
        );
    }

    #[test]
    fn summary_counts_visible_and_operational() {
        let facilities = vec![
            facility(FacilityStatus::Operational, 100.0, 2015),
            facility(FacilityStatus::Planned, 250.0, 2024),
            facility(FacilityStatus::Operational, 80.0, 2030),
        ];
        let pricing = sample_pricing();
        let summary = SummaryStats::for_year(&facilities, Some(&pricing), 2025);
        assert_eq!(summary.total_facilities, 2);
        assert_eq!(summary.total_capacity_mw, 350.0);
        assert_eq!(summary.operational_count, 1);
        assert_eq!(summary.avg_price_cents_kwh, Some(8.6));
    }

    #[test]
    fn summary_without_pricing_has_no_price() {
        let facilities = vec![facility(FacilityStatus::Operational, 10.0, 2010)];
        let summary = SummaryStats::for_year(&facilities, None, 2025);
        assert_eq!(summary.avg_price_cents_kwh, None);
        assert_eq!(summary.total_facilities, 1);
    }
}
