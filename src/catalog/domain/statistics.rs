//! Summary views over the catalog.

use serde::Serialize;

/// Aggregate figures describing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    /// Number of records.
    pub total_records: usize,
    /// Records with a population above one.
    pub wild_species: usize,
    /// Records with a population of one or less.
    pub individuals: usize,
    /// Sum of all populations.
    pub total_population: u64,
    /// Mean population rounded down, zero for an empty catalog.
    pub average_population: u64,
    /// Number of successful random selections so far.
    pub random_access_count: u64,
}

/// Number of records sharing a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    /// Location exactly as recorded.
    pub location: String,
    /// Number of records at the location.
    pub count: usize,
}
