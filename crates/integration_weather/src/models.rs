//! Open-Meteo API response models

use domain::entities::{ForecastDaily, GeocodeResult};
use serde::Deserialize;

/// Geocoding search response
///
/// `results` is omitted by the API when nothing matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodeResult>>,
}

/// Forecast response, reduced to the daily block
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub daily: Option<ForecastDaily>,
}
