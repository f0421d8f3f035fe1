//! Display ports for the setup surface and the widget
//!
//! Views are driven synchronously by the controllers. They hold no state
//! the controllers depend on.

use domain::entities::GeocodeResult;
use domain::value_objects::{Location, TemperatureUnit};

/// Contents of the add-location form
///
/// Coordinates are kept as typed text; they are parsed on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationForm {
    pub name: String,
    pub lat: String,
    pub lon: String,
}

impl LocationForm {
    /// Form filled with explicit values
    #[must_use]
    pub fn new(name: impl Into<String>, lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat: lat.into(),
            lon: lon.into(),
        }
    }

    /// Form prefilled from a geocoding result, coordinates with 4 decimals
    #[must_use]
    pub fn from_result(result: &GeocodeResult) -> Self {
        Self {
            name: result.name.clone(),
            lat: format!("{:.4}", result.latitude),
            lon: format!("{:.4}", result.longitude),
        }
    }

    /// Whether every field is blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.lat.is_empty() && self.lon.is_empty()
    }
}

/// What the search results panel currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPanel {
    /// Panel not shown
    #[default]
    Hidden,
    /// Selectable results, addressed by position
    Results(Vec<GeocodeResult>),
    /// Search succeeded without matches
    NoResults,
    /// Search request failed
    Failed,
}

impl SearchPanel {
    /// Result at `index` when results are shown
    #[must_use]
    pub fn result(&self, index: usize) -> Option<&GeocodeResult> {
        match self {
            Self::Results(results) => results.get(index),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Rendered slots of the widget display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    /// Location display name
    pub place_name: String,
    /// Localized condition text
    pub description: String,
    /// Main temperature (the daily maximum)
    pub temperature: String,
    pub temperature_max: String,
    pub temperature_min: String,
    /// Relative path of the condition icon
    pub icon_path: String,
    /// Alt text of the icon (the description)
    pub icon_alt: String,
}

/// Setup surface display
pub trait SetupView: Send {
    /// Show the configured location list (empty list shows a placeholder)
    fn render_locations(&mut self, locations: &[Location]);

    /// Show the generated widget URL, or clear it
    fn render_url(&mut self, url: Option<&str>);

    /// Point the preview at a widget URL, or blank it
    fn render_preview(&mut self, url: Option<&str>);

    fn render_search_panel(&mut self, panel: &SearchPanel);

    fn render_form(&mut self, form: &LocationForm);

    fn clear_search_input(&mut self);

    /// Bring the interval and unit controls in line with loaded state
    fn sync_settings(&mut self, interval: u64, unit: TemperatureUnit);

    /// Blocking user-facing message
    fn alert(&mut self, message: &str);

    /// Transient confirmation that the URL was copied
    fn show_copy_feedback(&mut self);
}

/// Widget display
pub trait WidgetView: Send {
    fn show_loading(&mut self);

    /// Terminal error state with a localized message
    fn show_error(&mut self, message: &str);

    /// Switch from loading to the weather display
    fn show_display(&mut self);

    fn render_card(&mut self, card: &WeatherCard);
}
