//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod clipboard_adapter;
mod weather_adapter;

pub use clipboard_adapter::CommandClipboard;
pub use weather_adapter::WeatherAdapter;
