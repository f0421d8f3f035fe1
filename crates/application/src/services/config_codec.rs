//! Widget configuration codec
//!
//! Serializes [`WidgetConfig`] into widget URL query strings and back, and
//! persists the setup surface's configuration in a key-value store.
//!
//! Decoding never fails: malformed or out-of-range parameters fall back to
//! their defaults field by field, the same rules used for persisted state.

use std::sync::Arc;

use domain::entities::{DEFAULT_INTERVAL_MS, WidgetConfig, parse_interval};
use domain::value_objects::{Location, TemperatureUnit};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::{Url, form_urlencoded};

use crate::error::ApplicationError;
use crate::ports::KeyValueStorePort;

/// Key under which the setup surface persists its configuration
pub const STORAGE_KEY: &str = "obs-weather-widget-setup";

const PARAM_LOCATIONS: &str = "locations";
const PARAM_INTERVAL: &str = "interval";
const PARAM_UNIT: &str = "unit";

/// Encodes, decodes and persists widget configuration
#[derive(Clone)]
pub struct ConfigCodec {
    store: Arc<dyn KeyValueStorePort>,
    storage_key: String,
}

impl std::fmt::Debug for ConfigCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigCodec")
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl ConfigCodec {
    /// Codec persisting under [`STORAGE_KEY`]
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Codec persisting under a custom key
    pub fn with_key(store: Arc<dyn KeyValueStorePort>, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
        }
    }

    /// Serialize a configuration into a form-urlencoded query string
    ///
    /// `locations` is a JSON array of `{name, lat, lon}`, `interval` the
    /// decimal millisecond count and `unit` the unit literal. All three
    /// parameters are always present.
    #[must_use]
    pub fn encode(config: &WidgetConfig) -> String {
        let locations = serde_json::to_string(&config.locations).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize locations");
            "[]".to_string()
        });

        form_urlencoded::Serializer::new(String::new())
            .append_pair(PARAM_LOCATIONS, &locations)
            .append_pair(PARAM_INTERVAL, &config.interval.to_string())
            .append_pair(PARAM_UNIT, config.unit.as_str())
            .finish()
    }

    /// Parse a widget query string, with or without the leading `?`
    ///
    /// Only the first occurrence of each parameter is used.
    #[must_use]
    pub fn decode(query: &str) -> WidgetConfig {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut locations = None;
        let mut interval = None;
        let mut unit = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                PARAM_LOCATIONS if locations.is_none() => locations = Some(value),
                PARAM_INTERVAL if interval.is_none() => interval = Some(value),
                PARAM_UNIT if unit.is_none() => unit = Some(value),
                _ => {},
            }
        }

        let locations = match locations.as_deref().map(decode_locations) {
            Some(Ok(locations)) => locations,
            Some(Err(e)) => {
                warn!(error = %e, "Ignoring unreadable locations parameter");
                Vec::new()
            },
            None => Vec::new(),
        };

        WidgetConfig {
            locations,
            interval: interval.as_deref().map_or(DEFAULT_INTERVAL_MS, parse_interval),
            unit: unit
                .as_deref()
                .and_then(TemperatureUnit::from_literal)
                .unwrap_or_default(),
        }
    }

    /// Decode the query part of a full widget URL
    ///
    /// Input that is not an absolute URL is treated as the query itself,
    /// starting after the first `?` if there is one.
    #[must_use]
    pub fn decode_url(url: &str) -> WidgetConfig {
        match Url::parse(url) {
            Ok(parsed) => Self::decode(parsed.query().unwrap_or_default()),
            Err(_) => {
                let query = url.split_once('?').map_or(url, |(_, query)| query);
                Self::decode(query)
            },
        }
    }

    /// Full widget URL for a configuration
    ///
    /// Returns `None` when there are no locations to show.
    #[must_use]
    pub fn widget_url(base: &str, config: &WidgetConfig) -> Option<String> {
        config
            .has_locations()
            .then(|| format!("{base}?{}", Self::encode(config)))
    }

    /// Load the persisted configuration
    ///
    /// Returns `None` when nothing usable is stored: missing key, store
    /// failure, malformed JSON or a non-object blob. Individual fields are
    /// validated and fall back to their defaults.
    #[instrument(skip(self), fields(key = %self.storage_key))]
    pub async fn load_persisted(&self) -> Option<WidgetConfig> {
        let raw = match self.store.get(&self.storage_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No persisted configuration");
                return None;
            },
            Err(e) => {
                warn!(error = %e, "Failed to read persisted configuration");
                return None;
            },
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Persisted configuration is not valid JSON");
                return None;
            },
        };

        let config = WidgetConfig::from_json_value(&value);
        if config.is_none() {
            warn!("Persisted configuration is not an object");
        }
        config
    }

    /// Persist a configuration; failures are logged and otherwise ignored
    #[instrument(skip(self, config), fields(key = %self.storage_key))]
    pub async fn save_persisted(&self, config: &WidgetConfig) {
        let blob = match serde_json::to_string(config) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to serialize configuration");
                return;
            },
        };

        match self.store.set(&self.storage_key, &blob).await {
            Ok(()) => debug!(locations = config.locations.len(), "Configuration saved"),
            Err(e) => warn!(error = %e, "Failed to persist configuration"),
        }
    }
}

/// Parse the `locations` parameter, dropping entries that fail validation
fn decode_locations(raw: &str) -> Result<Vec<Location>, ApplicationError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ApplicationError::ConfigDecode(e.to_string()))?;
    let items = value.as_array().ok_or_else(|| {
        ApplicationError::ConfigDecode("locations is not a JSON array".to_string())
    })?;

    let locations: Vec<Location> = items.iter().filter_map(Location::from_json_value).collect();
    if locations.len() < items.len() {
        warn!(
            dropped = items.len() - locations.len(),
            "Dropped invalid locations from widget URL"
        );
    }
    Ok(locations)
}
