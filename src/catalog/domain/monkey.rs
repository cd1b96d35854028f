//! Monkey record value object and its derived views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A monkey species, or a single named monkey when the population is one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonkeyRecord {
    name: String,
    location: String,
    details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinates: Option<GeoPoint>,
}

impl MonkeyRecord {
    /// Creates a record without image or coordinates.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        details: impl Into<String>,
        population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            details: details.into(),
            image: None,
            population,
            coordinates: None,
        }
    }

    /// Sets the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the coordinates.
    #[must_use]
    pub const fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(GeoPoint::new(latitude, longitude));
        self
    }

    /// Returns the species or individual name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the geographic location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the descriptive details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the image URL, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the population count.
    #[must_use]
    pub const fn population(&self) -> u64 {
        self.population
    }

    /// Returns the coordinates, if any.
    #[must_use]
    pub const fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }

    /// Wild species have a population above one.
    #[must_use]
    pub const fn is_wild_species(&self) -> bool {
        self.population > 1
    }

    /// `"Individual"` for a population of exactly one, otherwise the
    /// population with comma thousands separators.
    #[must_use]
    pub fn formatted_population(&self) -> String {
        if self.population == 1 {
            return "Individual".to_owned();
        }
        group_thousands(self.population)
    }

    /// Coordinates to six decimal places, e.g. `"47.606209, -122.332071"`.
    #[must_use]
    pub fn formatted_coordinates(&self) -> Option<String> {
        self.coordinates.map(|point| point.to_string())
    }
}

impl fmt::Display for MonkeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Population: {})",
            self.name,
            self.location,
            self.formatted_population()
        )
    }
}

/// Renders `value` with comma thousands separators, e.g. `1,234,567`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
}
