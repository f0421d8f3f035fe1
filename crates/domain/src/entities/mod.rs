//! Domain entities - configuration state and API data shapes

mod forecast;
mod geocode_result;
mod widget_config;

pub use forecast::{DailyEntry, ForecastDaily, LocationWeather, TOMORROW_INDEX};
pub use geocode_result::GeocodeResult;
pub use widget_config::{DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS, WidgetConfig, parse_interval};
