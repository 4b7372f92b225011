//! Data-preparation core for a Virginia datacenter and electricity-pricing map.
//!
//! Turns raw in-memory inputs (county polygons, facility records, the
//! county-to-utility table, pricing series) into the enriched and aggregated
//! model a display layer renders. Everything here is pure and synchronous;
//! fetching, rendering, and reactive state live with the callers.

/// County-to-utility enrichment join over polygon collections.
pub mod enrich;
pub mod facility;
pub mod geojson;
/// Price series by utility region and per-year summary stats.
pub mod pricing;
pub mod region;
/// Marker deconfliction for spatially coincident facilities.
pub mod spacing;
pub mod utility;
