//! Per-region aggregation of facility counts and capacity by query year.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::facility::Facility;
use crate::utility::{UtilityKey, UtilityMapping, UtilityResolver};

/// Facility counts and capacity totals per utility region.
///
/// Always carries an entry for every known [`UtilityKey`], zero when no
/// facility resolved to that region, so the display layer never probes for
/// missing keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStats {
    /// Number of visible facilities per region.
    pub counts: BTreeMap<UtilityKey, u32>,
    /// Total nameplate capacity per region, in megawatts.
    pub total_capacity_mw: BTreeMap<UtilityKey, f64>,
}

impl RegionStats {
    fn zeroed() -> Self {
        let mut counts = BTreeMap::new();
        let mut total_capacity_mw = BTreeMap::new();
        for key in UtilityKey::ALL {
            counts.insert(key, 0);
            total_capacity_mw.insert(key, 0.0);
        }
        Self {
            counts,
            total_capacity_mw,
        }
    }

    /// Facility count for one region.
    pub fn count(&self, key: UtilityKey) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Capacity total for one region, in megawatts.
    pub fn capacity_mw(&self, key: UtilityKey) -> f64 {
        self.total_capacity_mw.get(&key).copied().unwrap_or(0.0)
    }

    /// Total facility count across all regions.
    pub fn total_count(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Total capacity across all regions, in megawatts.
    pub fn total_capacity(&self) -> f64 {
        self.total_capacity_mw.values().sum()
    }
}

impl fmt::Display for RegionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Region stats:")?;
        for key in UtilityKey::ALL {
            writeln!(
                f,
                "  {:<22} {:>4} facilities  {:>9.1} MW",
                key.label(),
                self.count(key),
                self.capacity_mw(key)
            )?;
        }
        write!(
            f,
            "  {:<22} {:>4} facilities  {:>9.1} MW",
            "Total",
            self.total_count(),
            self.total_capacity()
        )
    }
}

/// Aggregates facilities visible at `year` into per-region counts and
/// capacity totals.
///
/// A facility is attributed by resolving its county name through the reverse
/// FIPS index; unresolvable names land on the default region. Missing capacity
/// contributes 0. Facilities opened after `year` are excluded entirely.
/// Aggregation is commutative, so the result is independent of input order.
pub fn aggregate_region(
    facilities: &[Facility],
    mapping: &UtilityMapping,
    year: i32,
) -> RegionStats {
    let resolver = UtilityResolver::new(mapping);
    let mut stats = RegionStats::zeroed();
    for facility in facilities {
        if facility.year_opened > year {
            continue;
        }
        let key = resolver.by_name(&facility.county);
        *stats.counts.entry(key).or_insert(0) += 1;
        *stats.total_capacity_mw.entry(key).or_insert(0.0) += facility.capacity_mw;
    }
    stats
}
