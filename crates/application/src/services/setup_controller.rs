//! Setup surface controller
//!
//! Owns the setup state and reacts to [`SetupEvent`]s. Every configuration
//! mutation ends in [`SetupController::on_config_changed`], which re-renders
//! the list, regenerates the widget URL, refreshes the preview and persists.

use std::sync::Arc;

use domain::entities::{WidgetConfig, parse_interval};
use domain::value_objects::{Location, TemperatureUnit};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::messages;
use crate::ports::{ClipboardPort, LocationForm, SearchPanel, SetupView};
use crate::services::{ConfigCodec, WeatherService};

/// Shortest trimmed query that triggers a search
const MIN_QUERY_CHARS: usize = 2;

/// Search and URL settings of the setup surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupOptions {
    /// Widget page the generated URL points at
    pub widget_base_url: String,
    /// Results requested per search
    pub search_count: u32,
    /// Language of search results
    pub search_language: String,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            widget_base_url: "http://localhost:8080/widget".to_string(),
            search_count: 5,
            search_language: "zh".to_string(),
        }
    }
}

/// Where the search flow currently stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetupPhase {
    #[default]
    Idle,
    Searching,
    ResultsShown,
    SearchFailed,
    FormPrefilled,
}

/// User actions on the setup surface
///
/// Positions are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupEvent {
    /// Run a search (explicit, or after the input settled)
    Search(String),
    /// Copy the result at a position into the form
    SelectResult(usize),
    /// Replace the form contents with what the user typed
    EditForm(LocationForm),
    /// Validate the form and append its location
    AddLocation,
    /// Remove the configured location at a position
    RemoveLocation(usize),
    /// Apply the interval text and unit controls
    ChangeSettings {
        interval: String,
        unit: TemperatureUnit,
    },
    CopyUrl,
    RefreshPreview,
}

/// Complete state of the setup surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupState {
    /// Configuration being edited
    pub config: WidgetConfig,
    pub phase: SetupPhase,
    pub panel: SearchPanel,
    pub form: LocationForm,
    /// Text of the last search
    pub search_input: String,
    /// Widget URL for `config`, absent without locations
    pub url: Option<String>,
}

/// Drives the setup surface
pub struct SetupController<V> {
    weather: WeatherService,
    codec: ConfigCodec,
    clipboard: Arc<dyn ClipboardPort>,
    options: SetupOptions,
    view: V,
    state: SetupState,
}

impl<V> std::fmt::Debug for SetupController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupController")
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V: SetupView> SetupController<V> {
    pub fn new(
        weather: WeatherService,
        codec: ConfigCodec,
        clipboard: Arc<dyn ClipboardPort>,
        options: SetupOptions,
        view: V,
    ) -> Self {
        Self {
            weather,
            codec,
            clipboard,
            options,
            view,
            state: SetupState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SetupState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Restore persisted state and render everything once
    ///
    /// Nothing is written back to the store.
    #[instrument(skip(self))]
    pub async fn init(&mut self) {
        if let Some(config) = self.codec.load_persisted().await {
            info!(
                locations = config.locations.len(),
                interval = config.interval,
                unit = %config.unit,
                "Restored setup state"
            );
            self.state.config = config;
        }

        self.view
            .sync_settings(self.state.config.interval, self.state.config.unit);
        self.render_config();
    }

    /// Handle one user action
    pub async fn dispatch(&mut self, event: SetupEvent) {
        debug!(?event, "Setup event");
        match event {
            SetupEvent::Search(query) => self.search(&query).await,
            SetupEvent::SelectResult(index) => self.select_result(index),
            SetupEvent::EditForm(form) => self.state.form = form,
            SetupEvent::AddLocation => self.add_location().await,
            SetupEvent::RemoveLocation(index) => self.remove_location(index).await,
            SetupEvent::ChangeSettings { interval, unit } => {
                self.change_settings(&interval, unit).await;
            },
            SetupEvent::CopyUrl => self.copy_url().await,
            SetupEvent::RefreshPreview => self.view.render_preview(self.state.url.as_deref()),
        }
    }

    /// Re-render the list, regenerate the URL, refresh the preview, persist
    pub async fn on_config_changed(&mut self) {
        self.render_config();
        self.codec.save_persisted(&self.state.config).await;
    }

    fn render_config(&mut self) {
        self.state.url = ConfigCodec::widget_url(&self.options.widget_base_url, &self.state.config);
        self.view.render_locations(&self.state.config.locations);
        self.view.render_url(self.state.url.as_deref());
        self.view.render_preview(self.state.url.as_deref());
    }

    async fn search(&mut self, query: &str) {
        let query = query.trim();
        self.state.search_input = query.to_string();

        if query.chars().count() < MIN_QUERY_CHARS {
            self.state.phase = SetupPhase::Idle;
            self.show_panel(SearchPanel::Hidden);
            return;
        }

        self.state.phase = SetupPhase::Searching;
        let result = self
            .weather
            .search_location(
                query,
                self.options.search_count,
                &self.options.search_language,
            )
            .await;

        match result {
            Ok(results) if results.is_empty() => {
                self.state.phase = SetupPhase::ResultsShown;
                self.show_panel(SearchPanel::NoResults);
            },
            Ok(results) => {
                debug!(count = results.len(), "Search results");
                self.state.phase = SetupPhase::ResultsShown;
                self.show_panel(SearchPanel::Results(results));
            },
            Err(e) => {
                warn!(error = %e, query, "Search failed");
                self.state.phase = SetupPhase::SearchFailed;
                self.show_panel(SearchPanel::Failed);
            },
        }
    }

    fn show_panel(&mut self, panel: SearchPanel) {
        self.state.panel = panel;
        self.view.render_search_panel(&self.state.panel);
    }

    fn select_result(&mut self, index: usize) {
        let Some(result) = self.state.panel.result(index) else {
            debug!(index, "No search result at position");
            return;
        };

        self.state.form = LocationForm::from_result(result);
        self.state.phase = SetupPhase::FormPrefilled;
        self.state.search_input.clear();
        self.show_panel(SearchPanel::Hidden);
        self.view.clear_search_input();
        self.view.render_form(&self.state.form);
    }

    async fn add_location(&mut self) {
        let form = &self.state.form;
        let location = match Location::new(
            form.name.as_str(),
            parse_coordinate(&form.lat),
            parse_coordinate(&form.lon),
        ) {
            Ok(location) => location,
            Err(e) => {
                debug!(error = %e, "Rejected location form");
                self.view.alert(messages::validation_message(&e));
                return;
            },
        };

        info!(location = %location, "Location added");
        self.state.config.locations.push(location);
        self.state.form = LocationForm::default();
        self.state.phase = SetupPhase::Idle;
        self.view.render_form(&self.state.form);
        self.on_config_changed().await;
    }

    async fn remove_location(&mut self, index: usize) {
        if index >= self.state.config.locations.len() {
            debug!(index, "No location at position");
            return;
        }

        let removed = self.state.config.locations.remove(index);
        info!(location = %removed.name, "Location removed");
        self.on_config_changed().await;
    }

    async fn change_settings(&mut self, interval: &str, unit: TemperatureUnit) {
        self.state.config.interval = parse_interval(interval);
        self.state.config.unit = unit;
        debug!(
            interval = self.state.config.interval,
            unit = %unit,
            "Settings changed"
        );
        self.on_config_changed().await;
    }

    async fn copy_url(&mut self) {
        let Some(url) = self.state.url.clone() else {
            self.view.alert(messages::ADD_LOCATION_FIRST);
            return;
        };

        match self.clipboard.write_text(&url).await {
            Ok(()) => self.view.show_copy_feedback(),
            Err(e) => {
                warn!(error = %e, "Copy failed");
                self.view.alert(messages::COPY_FAILED);
            },
        }
    }
}

/// Parse the leading decimal number of a coordinate field
///
/// Trailing text after the number is ignored. A field with no leading
/// number becomes NaN and fails validation.
fn parse_coordinate(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}
