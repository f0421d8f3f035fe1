//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo geocoding and forecast APIs
//! (<https://open-meteo.com>). Neither endpoint requires an API key.

pub mod client;
mod models;

pub use client::{
    DEFAULT_SEARCH_COUNT, DEFAULT_SEARCH_LANGUAGE, MIN_QUERY_CHARS, OpenMeteoClient,
    WeatherClient, WeatherConfig, WeatherError,
};
pub use models::{ForecastResponse, GeocodingResponse};
