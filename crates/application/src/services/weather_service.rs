//! Weather service
//!
//! Thin use-case layer over [`WeatherPort`]: place search and the
//! all-or-nothing forecast fan-out for a list of locations.

use std::sync::Arc;

use domain::entities::{ForecastDaily, GeocodeResult, LocationWeather};
use domain::value_objects::{Location, TemperatureUnit};
use futures::future::try_join_all;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Weather use cases shared by the setup surface and the widget
#[derive(Clone)]
pub struct WeatherService {
    port: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a service over a weather port
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self { port }
    }

    /// Search places by name
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Search` when the request fails.
    pub async fn search_location(
        &self,
        query: &str,
        count: u32,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, ApplicationError> {
        self.port.search_location(query, count, language).await
    }

    /// Fetch the forecast for one location
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Forecast` when the request fails.
    pub async fn fetch_weather(
        &self,
        location: &Location,
        unit: TemperatureUnit,
    ) -> Result<ForecastDaily, ApplicationError> {
        self.port
            .fetch_weather(location.lat, location.lon, unit)
            .await
    }

    /// Fetch forecasts for every location concurrently
    ///
    /// Results come back in input order. The first failure aborts the whole
    /// batch; partial results are discarded.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::BatchFetch` naming the failed location.
    #[instrument(skip(self, locations), fields(count = locations.len(), unit = %unit))]
    pub async fn fetch_weather_for_locations(
        &self,
        locations: &[Location],
        unit: TemperatureUnit,
    ) -> Result<Vec<LocationWeather>, ApplicationError> {
        let fetches = locations.iter().map(|location| async move {
            match self.fetch_weather(location, unit).await {
                Ok(weather) => Ok(LocationWeather {
                    location: location.clone(),
                    weather,
                }),
                Err(e) => {
                    warn!(location = %location.name, error = %e, "Forecast fetch failed");
                    Err(ApplicationError::BatchFetch {
                        location: location.name.clone(),
                        source: Box::new(e),
                    })
                },
            }
        });

        let results = try_join_all(fetches).await?;
        debug!(count = results.len(), "Fetched forecasts for all locations");
        Ok(results)
    }
}
