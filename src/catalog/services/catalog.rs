//! Read-only monkey catalog with lookup, filtering and random selection.

use crate::catalog::{
    builtin::builtin_records,
    domain::{CatalogStatistics, LocationCount, MonkeyRecord},
};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::atomic::{AtomicU64, Ordering};

/// Immutable set of monkey records plus a counter of random selections.
///
/// The records never change after construction, so shared references can be
/// handed out freely. The counter is the only mutable state and is atomic, so
/// a catalog behind an `Arc` may be queried from many threads at once.
#[derive(Debug, Default)]
pub struct MonkeyCatalog {
    records: Vec<MonkeyRecord>,
    random_access_count: AtomicU64,
}

impl MonkeyCatalog {
    /// Creates a catalog holding `records` in the given order.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = MonkeyRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
            random_access_count: AtomicU64::new(0),
        }
    }

    /// Creates a catalog holding the bundled dataset.
    #[must_use]
    pub fn with_builtin_records() -> Self {
        let catalog = Self::new(builtin_records());
        tracing::debug!(count = catalog.count(), "loaded builtin monkey catalog");
        catalog
    }

    /// Returns every record in insertion order.
    #[must_use]
    pub fn all(&self) -> &[MonkeyRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.records.len()
    }

    /// Finds a record whose name equals `name`, ignoring case.
    ///
    /// Blank queries never match.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&MonkeyRecord> {
        if name.trim().is_empty() {
            return None;
        }
        let needle = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.name().to_lowercase() == needle)
    }

    /// Picks a record uniformly at random using the thread-local generator.
    ///
    /// See [`MonkeyCatalog::random_with`].
    #[must_use]
    pub fn random(&self) -> Option<&MonkeyRecord> {
        self.random_with(&mut rand::rng())
    }

    /// Picks a record uniformly at random using `rng`.
    ///
    /// The access counter is incremented only when a record is returned; an
    /// empty catalog yields `None` and leaves the counter untouched.
    pub fn random_with<G>(&self, rng: &mut G) -> Option<&MonkeyRecord>
    where
        G: Rng + ?Sized,
    {
        let picked = self.records.choose(rng)?;
        let previous = self.random_access_count.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            name = picked.name(),
            access_count = previous.saturating_add(1),
            "selected random monkey"
        );
        Some(picked)
    }

    /// Number of successful random selections since construction or the
    /// last reset.
    #[must_use]
    pub fn random_access_count(&self) -> u64 {
        self.random_access_count.load(Ordering::Relaxed)
    }

    /// Sets the random selection counter back to zero.
    pub fn reset_random_access_count(&self) {
        self.random_access_count.store(0, Ordering::Relaxed);
    }

    /// Records whose location contains `query`, ignoring case.
    ///
    /// Blank queries match nothing.
    #[must_use]
    pub fn by_location(&self, query: &str) -> Vec<&MonkeyRecord> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.location().to_lowercase().contains(&needle))
            .collect()
    }

    /// Records with `min <= population <= max`. Empty when `min > max`.
    #[must_use]
    pub fn by_population_range(&self, min: u64, max: u64) -> Vec<&MonkeyRecord> {
        self.records
            .iter()
            .filter(|record| (min..=max).contains(&record.population()))
            .collect()
    }

    /// Records with a population above one.
    #[must_use]
    pub fn wild_species(&self) -> Vec<&MonkeyRecord> {
        self.records
            .iter()
            .filter(|record| record.is_wild_species())
            .collect()
    }

    /// Records with a population of one or less.
    #[must_use]
    pub fn individuals(&self) -> Vec<&MonkeyRecord> {
        self.records
            .iter()
            .filter(|record| !record.is_wild_species())
            .collect()
    }

    /// Summarises the catalog, including the current random access count.
    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        let wild_species = self.wild_species().len();
        let total_population = self
            .records
            .iter()
            .map(MonkeyRecord::population)
            .fold(0_u64, u64::saturating_add);
        let record_count = u64::try_from(self.count()).unwrap_or(u64::MAX);

        CatalogStatistics {
            total_records: self.count(),
            wild_species,
            individuals: self.count().saturating_sub(wild_species),
            total_population,
            average_population: rounded_mean(total_population, record_count),
            random_access_count: self.random_access_count(),
        }
    }

    /// Up to `limit` names containing `partial`, ignoring case, in catalog
    /// order.
    #[must_use]
    pub fn suggest_names(&self, partial: &str, limit: usize) -> Vec<&str> {
        if partial.trim().is_empty() {
            return Vec::new();
        }
        let needle = partial.to_lowercase();
        self.records
            .iter()
            .map(MonkeyRecord::name)
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Up to `limit` locations with their record counts, most populated
    /// first. Equal counts keep the order in which the locations first
    /// appear.
    #[must_use]
    pub fn location_distribution(&self, limit: usize) -> Vec<LocationCount> {
        let mut counts: Vec<LocationCount> = Vec::new();
        for record in &self.records {
            if let Some(entry) = counts
                .iter_mut()
                .find(|entry| entry.location == record.location())
            {
                entry.count = entry.count.saturating_add(1);
                continue;
            }
            counts.push(LocationCount {
                location: record.location().to_owned(),
                count: 1,
            });
        }
        counts.sort_by(|left, right| right.count.cmp(&left.count));
        counts.truncate(limit);
        counts
    }
}

/// Mean of `total` over `count`, rounded to the nearest integer with halves
/// rounded up. Zero when `count` is zero.
fn rounded_mean(total: u64, count: u64) -> u64 {
    let Some(quotient) = total.checked_div(count) else {
        return 0;
    };
    let remainder = total.checked_rem(count).unwrap_or(0);
    if remainder.saturating_mul(2) >= count {
        quotient.saturating_add(1)
    } else {
        quotient
    }
}
