//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Location name is missing or blank
    #[error("Location name must not be empty")]
    EmptyLocationName,

    /// Latitude is not a number in [-90, 90]
    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    /// Longitude is not a number in [-180, 180]
    #[error("Invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),

    /// Unrecognized temperature unit literal
    #[error("Invalid temperature unit: {0} (use 'celsius' or 'fahrenheit')")]
    InvalidTemperatureUnit(String),
}
