//! Value Objects - Immutable, identity-less domain primitives

mod location;
mod temperature_unit;
mod weather_condition;

pub use location::{Location, validate_latitude, validate_longitude};
pub use temperature_unit::TemperatureUnit;
pub use weather_condition::{ICON_DIR, WeatherCondition, WeatherIcon, weather_code_to_icon};
