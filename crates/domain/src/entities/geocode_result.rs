//! Geocoding search result

use serde::{Deserialize, Serialize};

use crate::value_objects::Location;

/// A place returned by the geocoding API
///
/// Ephemeral: produced per search and discarded once a selection is made or
/// a newer search replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Provider-side identifier
    #[serde(default)]
    pub id: i64,
    /// Place name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Country name, if known
    #[serde(default)]
    pub country: Option<String>,
    /// First-level administrative area (state, province, county)
    #[serde(default)]
    pub admin1: Option<String>,
}

impl GeocodeResult {
    /// One-line label: `name, country (lat, lon)` with 4-decimal coordinates
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}, {} ({:.4}, {:.4})",
            self.name,
            self.country.as_deref().unwrap_or_default(),
            self.latitude,
            self.longitude
        )
    }

    /// Convert into a location carrying the result's name and coordinates
    #[must_use]
    pub fn to_location(&self) -> Location {
        Location {
            name: self.name.clone(),
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}
