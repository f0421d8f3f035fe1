//! Application services - Use case implementations

mod config_codec;
mod debounce;
mod setup_controller;
mod weather_service;
mod widget_controller;

pub use config_codec::{ConfigCodec, STORAGE_KEY};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use setup_controller::{SetupController, SetupEvent, SetupOptions, SetupPhase, SetupState};
pub use weather_service::WeatherService;
pub use widget_controller::{WidgetController, WidgetPhase, WidgetState};
