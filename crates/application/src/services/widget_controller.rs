//! Widget controller
//!
//! Linear startup (loading, decode, fetch, display) followed by a
//! fixed-period round-robin over the fetched locations. There is no retry:
//! an empty configuration or a failed fetch ends in the error state.

use domain::entities::{LocationWeather, WidgetConfig};
use domain::value_objects::{TemperatureUnit, WeatherCondition, weather_code_to_icon};
use tracing::{debug, error, info, instrument, warn};

use crate::messages;
use crate::ports::{WeatherCard, WidgetView};
use crate::services::{ConfigCodec, WeatherService};

/// Visible state of the widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WidgetPhase {
    #[default]
    Loading,
    /// Terminal error with its localized message
    Error(String),
    Display,
}

/// Runtime state of the widget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub config: WidgetConfig,
    /// Forecasts in configuration order
    pub weather: Vec<LocationWeather>,
    /// Position of the location on display
    pub current_index: usize,
    pub phase: WidgetPhase,
}

impl WeatherCard {
    /// Card for tomorrow's forecast of one location
    ///
    /// Returns `None` when the forecast has no entry for tomorrow.
    #[must_use]
    pub fn for_tomorrow(data: &LocationWeather, unit: TemperatureUnit) -> Option<Self> {
        let tomorrow = data.weather.tomorrow()?;
        let description = WeatherCondition::from_wmo_code(tomorrow.weather_code)
            .description()
            .to_string();
        let max = format_temperature(tomorrow.temperature_max, unit);

        Some(Self {
            place_name: data.location.name.clone(),
            temperature: max.clone(),
            temperature_max: max,
            temperature_min: format_temperature(tomorrow.temperature_min, unit),
            icon_path: weather_code_to_icon(tomorrow.weather_code).path(),
            icon_alt: description.clone(),
            description,
        })
    }
}

/// Round to the nearest integer, halves toward positive infinity
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", round_half_up(value), unit.symbol())
}

/// Drives the widget display
pub struct WidgetController<V> {
    weather: WeatherService,
    view: V,
    state: WidgetState,
}

impl<V> std::fmt::Debug for WidgetController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V: WidgetView> WidgetController<V> {
    pub fn new(weather: WeatherService, view: V) -> Self {
        Self {
            weather,
            view,
            state: WidgetState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &WidgetState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Start the widget from its URL
    ///
    /// Returns `true` once the display is showing, `false` in the error
    /// state.
    #[instrument(skip(self, url))]
    pub async fn init(&mut self, url: &str) -> bool {
        self.state.phase = WidgetPhase::Loading;
        self.view.show_loading();

        self.state.config = ConfigCodec::decode_url(url);
        if !self.state.config.has_locations() {
            warn!("Widget URL has no locations");
            self.fail(messages::NO_LOCATIONS_CONFIGURED);
            return false;
        }

        let fetched = self
            .weather
            .fetch_weather_for_locations(&self.state.config.locations, self.state.config.unit)
            .await;

        match fetched {
            Ok(weather) => {
                info!(locations = weather.len(), "Weather loaded");
                self.state.weather = weather;
                self.state.current_index = 0;
                self.state.phase = WidgetPhase::Display;
                self.view.show_display();
                self.render_current();
                true
            },
            Err(e) => {
                error!(error = %e, "Failed to fetch weather");
                self.fail(messages::WEATHER_FETCH_FAILED);
                false
            },
        }
    }

    /// Cycle through the locations forever
    ///
    /// Returns immediately unless the display shows more than one location.
    pub async fn run_cycle(&mut self) {
        if self.state.phase != WidgetPhase::Display || self.state.weather.len() <= 1 {
            return;
        }

        let period = self.state.config.interval_duration();
        debug!(period_ms = period.as_millis(), "Starting display cycle");

        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.advance();
        }
    }

    /// Show the next location, wrapping around
    pub fn advance(&mut self) {
        if self.state.weather.is_empty() {
            return;
        }
        self.state.current_index = (self.state.current_index + 1) % self.state.weather.len();
        self.render_current();
    }

    fn render_current(&mut self) {
        let Some(data) = self.state.weather.get(self.state.current_index) else {
            return;
        };

        match WeatherCard::for_tomorrow(data, self.state.config.unit) {
            Some(card) => self.view.render_card(&card),
            None => warn!(
                location = %data.location.name,
                "Forecast has no entry for tomorrow, skipping render"
            ),
        }
    }

    fn fail(&mut self, message: &str) {
        self.state.phase = WidgetPhase::Error(message.to_string());
        self.view.show_error(message);
    }
}
