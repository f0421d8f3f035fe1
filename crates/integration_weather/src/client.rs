//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo geocoding and forecast APIs.

use std::time::Duration;

use async_trait::async_trait;
use domain::entities::{ForecastDaily, GeocodeResult};
use domain::value_objects::TemperatureUnit;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ForecastResponse, GeocodingResponse};

/// Result count used when the caller does not pick one
pub const DEFAULT_SEARCH_COUNT: u32 = 10;

/// Result language used when the caller does not pick one
pub const DEFAULT_SEARCH_LANGUAGE: &str = "en";

/// Shortest trimmed query that is sent to the geocoding API
pub const MIN_QUERY_CHARS: usize = 2;

const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: &str = "2";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for geocoding and forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Search places by name
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] after trimming return an
    /// empty list without touching the network.
    async fn search_location(
        &self,
        query: &str,
        count: u32,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, WeatherError>;

    /// Fetch today's and tomorrow's daily forecast for a coordinate
    async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<ForecastDaily, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.geocoding_base_url.trim_end_matches('/'))
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.forecast_base_url.trim_end_matches('/'))
    }

    /// Query parameters for a forecast request
    fn forecast_params(
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", FORECAST_DAYS.to_string()),
        ];
        if unit == TemperatureUnit::Fahrenheit {
            params.push(("temperature_unit", unit.as_str().to_string()));
        }
        params
    }

    /// Map a non-success status to an error
    fn check_status(response: &Response) -> Result<(), WeatherError> {
        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn search_location(
        &self,
        query: &str,
        count: u32,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, WeatherError> {
        let name = query.trim();
        if name.chars().count() < MIN_QUERY_CHARS {
            debug!("Query too short, skipping search");
            return Ok(Vec::new());
        }

        let count = count.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("name", name),
                ("count", count.as_str()),
                ("language", language),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        Self::check_status(&response)?;

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let results = body.results.unwrap_or_default();
        debug!(count = results.len(), "Geocoding search completed");
        Ok(results)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, unit = %unit))]
    async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
    ) -> Result<ForecastDaily, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let response = self
            .client
            .get(self.forecast_url())
            .query(&Self::forecast_params(latitude, longitude, unit))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        Self::check_status(&response)?;

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let daily = body.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        debug!(days = daily.weather_code.len(), "Forecast fetched");
        Ok(daily)
    }
}
