//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these
//! ports; front ends implement the view ports.

mod clipboard_port;
mod storage_port;
mod view_port;
mod weather_port;

#[cfg(test)]
pub use clipboard_port::MockClipboardPort;
pub use clipboard_port::ClipboardPort;
#[cfg(test)]
pub use storage_port::MockKeyValueStorePort;
pub use storage_port::KeyValueStorePort;
pub use view_port::{LocationForm, SearchPanel, SetupView, WeatherCard, WidgetView};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
