//! Domain model for the monkey catalog.

mod monkey;
mod statistics;

pub use monkey::{GeoPoint, MonkeyRecord, group_thousands};
pub use statistics::{CatalogStatistics, LocationCount};
