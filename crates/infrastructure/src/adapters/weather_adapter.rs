//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::entities::{ForecastDaily, GeocodeResult};
use domain::value_objects::TemperatureUnit;
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map a failed geocoding call
    fn map_search_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Search(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Search(WeatherError::InvalidCoordinates.to_string())
            },
        }
    }

    /// Map a failed forecast call
    fn map_forecast_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Forecast(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Forecast(WeatherError::InvalidCoordinates.to_string())
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn search_location(
        &self,
        query: &str,
        count: u32,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, ApplicationError> {
        let result = self
            .client
            .search_location(query, count, language)
            .await
            .map_err(Self::map_search_error);

        match &result {
            Ok(results) => {
                debug!(results = results.len(), "Geocoding search finished");
            },
            Err(e) => {
                debug!(error = %e, "Geocoding search failed");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<ForecastDaily, ApplicationError> {
        let result = self
            .client
            .fetch_weather(latitude, longitude, unit)
            .await
            .map_err(Self::map_forecast_error);

        match &result {
            Ok(daily) => {
                debug!(days = daily.weather_code.len(), "Retrieved daily forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get daily forecast");
            },
        }

        result
    }
}
