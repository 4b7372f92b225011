//! Utility-region keys, the county-to-utility reference table, and lookups.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Catch-all region for unrecognized or missing lookups.
///
/// Every lookup in this crate degrades to this key rather than erroring, so
/// partial or malformed reference data still renders.
pub const DEFAULT_UTILITY: UtilityKey = UtilityKey::Dominion;

/// One of the four fixed electricity-provider regions covering Virginia.
///
/// The set is closed: anything outside it resolves to [`DEFAULT_UTILITY`] at
/// deserialization and lookup time, so downstream consumers never see an
/// unrecognized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilityKey {
    Dominion,
    Apco,
    Cooperatives,
    Municipal,
}

impl UtilityKey {
    /// All known keys, in display order.
    pub const ALL: [UtilityKey; 4] = [
        UtilityKey::Dominion,
        UtilityKey::Apco,
        UtilityKey::Cooperatives,
        UtilityKey::Municipal,
    ];

    /// Parses a lowercase wire key. Returns `None` for anything unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dominion" => Some(Self::Dominion),
            "apco" => Some(Self::Apco),
            "cooperatives" => Some(Self::Cooperatives),
            "municipal" => Some(Self::Municipal),
            _ => None,
        }
    }

    /// Lowercase wire form of the key, as it appears in the reference tables.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Dominion => "dominion",
            Self::Apco => "apco",
            Self::Cooperatives => "cooperatives",
            Self::Municipal => "municipal",
        }
    }

    /// Human-readable provider name for legends and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dominion => "Dominion Energy",
            Self::Apco => "Appalachian Power",
            Self::Cooperatives => "Electric Cooperatives",
            Self::Municipal => "Municipal Utilities",
        }
    }
}

impl Default for UtilityKey {
    fn default() -> Self {
        DEFAULT_UTILITY
    }
}

impl fmt::Display for UtilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for UtilityKey {
    /// Unrecognized keys in input data degrade to [`DEFAULT_UTILITY`] instead
    /// of failing the whole load.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_key(&raw).unwrap_or(DEFAULT_UTILITY))
    }
}

/// Static county-to-utility reference table, loaded once per session and
/// read-only thereafter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UtilityMapping {
    /// FIPS code to utility-region key.
    #[serde(default)]
    pub mapping: HashMap<String, UtilityKey>,
    /// FIPS code to display name (e.g. `"51001"` to `"Accomack County"`).
    #[serde(default)]
    pub fips_names: HashMap<String, String>,
}

/// Resolves county identifiers (FIPS codes or free-text names) to utility keys.
///
/// Borrows its [`UtilityMapping`] and builds the reverse name-to-FIPS index
/// once at construction, so repeated name lookups stay cheap and the index can
/// never outlive or go stale against its mapping.
#[derive(Debug)]
pub struct UtilityResolver<'a> {
    mapping: &'a UtilityMapping,
    name_to_fips: HashMap<String, &'a str>,
}

impl<'a> UtilityResolver<'a> {
    /// Builds a resolver over the given mapping, indexing normalized county
    /// names back to FIPS codes.
    pub fn new(mapping: &'a UtilityMapping) -> Self {
        let mut name_to_fips = HashMap::with_capacity(mapping.fips_names.len());
        for (fips, name) in &mapping.fips_names {
            name_to_fips.insert(normalize_county_name(name), fips.as_str());
        }
        Self {
            mapping,
            name_to_fips,
        }
    }

    /// Looks up a utility key by FIPS code, defaulting to [`DEFAULT_UTILITY`]
    /// when the code is absent from the table.
    pub fn by_fips(&self, fips: &str) -> UtilityKey {
        self.mapping
            .mapping
            .get(fips)
            .copied()
            .unwrap_or(DEFAULT_UTILITY)
    }

    /// Looks up a utility key by free-text county name.
    ///
    /// The name is case-folded and stripped of a trailing " County" or
    /// " City" suffix before hitting the reverse index. Unresolvable names
    /// default to [`DEFAULT_UTILITY`].
    pub fn by_name(&self, county: &str) -> UtilityKey {
        match self.name_to_fips.get(normalize_county_name(county).as_str()) {
            Some(fips) => self.by_fips(fips),
            None => DEFAULT_UTILITY,
        }
    }

    /// Display name recorded for a FIPS code, if any.
    pub fn display_name(&self, fips: &str) -> Option<&'a str> {
        self.mapping.fips_names.get(fips).map(String::as_str)
    }
}

/// Case-folds a county name and strips one trailing " County" or " City"
/// suffix (any case), matching the reference table's naming convention.
fn normalize_county_name(name: &str) -> String {
    let folded = name.trim().to_lowercase();
    for suffix in [" county", " city"] {
        if let Some(stripped) = folded.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    folded
}
