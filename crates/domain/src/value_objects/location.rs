//! Named location value object
//!
//! A display name plus a latitude/longitude pair. The JSON shape
//! (`{"name": ..., "lat": ..., "lon": ...}`) is part of the widget URL
//! contract and of the persisted setup blob.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::DomainError;

/// A configured place shown by the widget
///
/// Fields are public because widget URLs are decoded without range checks;
/// use [`Location::new`] or [`Location::is_valid`] where validation matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name
    pub name: String,
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

/// Check that a latitude is a number in [-90, 90]
///
/// # Errors
///
/// Returns `DomainError::InvalidLatitude` for NaN or out-of-range values.
pub fn validate_latitude(lat: f64) -> Result<(), DomainError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(DomainError::InvalidLatitude(lat))
    }
}

/// Check that a longitude is a number in [-180, 180]
///
/// # Errors
///
/// Returns `DomainError::InvalidLongitude` for NaN or out-of-range values.
pub fn validate_longitude(lon: f64) -> Result<(), DomainError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(DomainError::InvalidLongitude(lon))
    }
}

impl Location {
    /// Create a validated location
    ///
    /// The name is trimmed and must not be empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in the order name,
    /// latitude, longitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::Location;
    ///
    /// let taipei = Location::new(" Taipei ", 25.0, 121.5).expect("valid");
    /// assert_eq!(taipei.name, "Taipei");
    /// assert!(Location::new("Nowhere", 95.0, 0.0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::EmptyLocationName);
        }
        validate_latitude(lat)?;
        validate_longitude(lon)?;
        Ok(Self { name, lat, lon })
    }

    /// Whether both coordinates are within range
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_latitude(self.lat).is_ok() && validate_longitude(self.lon).is_ok()
    }

    /// Build a location from an untrusted JSON value
    ///
    /// Accepts an object with a string `name` and numeric `lat`/`lon`
    /// within range. Anything else yields `None`.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?;
        let lat = object.get("lat")?.as_f64()?;
        let lon = object.get("lon")?.as_f64()?;

        let location = Self {
            name: name.to_string(),
            lat,
            lon,
        };
        location.is_valid().then_some(location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.lat, self.lon)
    }
}
