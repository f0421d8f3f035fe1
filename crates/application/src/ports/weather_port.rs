//! Weather service port
//!
//! Defines the interface for geocoding and forecast retrieval.

use async_trait::async_trait;
use domain::entities::{ForecastDaily, GeocodeResult};
use domain::value_objects::TemperatureUnit;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Search places by name
    ///
    /// # Arguments
    /// * `query` - Free-text place name; short queries yield no results
    /// * `count` - Maximum number of results
    /// * `language` - Result language code (e.g. "zh", "en")
    async fn search_location(
        &self,
        query: &str,
        count: u32,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, ApplicationError>;

    /// Fetch the daily forecast (today and tomorrow) for a coordinate
    async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<ForecastDaily, ApplicationError>;
}
