//! Infrastructure layer for Overlay Weather
//!
//! Implements the application ports against the outside world: the
//! Open-Meteo client, a clipboard command, and a file-backed key-value
//! store. Also owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::{CommandClipboard, WeatherAdapter};
pub use config::AppConfig;
pub use persistence::{FileKeyValueStore, InMemoryKeyValueStore};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
