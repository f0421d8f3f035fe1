//! Application configuration
//!
//! Split into focused sub-modules:
//! - `widget`: widget base URL, search defaults, debounce
//! - `storage`: where setup state is persisted
//! - `clipboard`: command used to copy the widget URL
//!
//! The `weather` section reuses the Open-Meteo client config and
//! `telemetry` lives next to the subscriber setup.

mod clipboard;
mod storage;
mod widget;

use std::collections::HashMap;
use std::path::Path;

use application::error::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use crate::telemetry::TelemetryConfig;
pub use clipboard::ClipboardConfig;
pub use integration_weather::WeatherConfig;
pub use storage::{APP_DIR_NAME, StorageConfig};
pub use widget::WidgetAppConfig;

/// Prefix of environment overrides, e.g. `OVERLAY_WEATHER_WIDGET__SEARCH_COUNT`
pub const ENV_PREFIX: &str = "OVERLAY_WEATHER";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo endpoints and timeout
    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub widget: WidgetAppConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, a file and the environment
    ///
    /// Without `path` an optional `config.{toml,json,yaml}` in the working
    /// directory is read; an explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`] but with an explicit environment map
    ///
    /// `None` reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or a value has the wrong type.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("widget.base_url", widget::default_base_url())?
            .set_default("widget.search_language", "zh")?;

        let builder = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                builder.add_source(config::File::from(path))
            },
            None => builder.add_source(config::File::with_name("config").required(false)),
        };

        // Override with environment variables (e.g., OVERLAY_WEATHER_WIDGET__SEARCH_COUNT)
        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Reject values the adapters cannot work with
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] naming the offending key.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.widget.base_url.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "widget.base_url must not be empty".into(),
            ));
        }
        if self.widget.search_count == 0 {
            return Err(ApplicationError::Configuration(
                "widget.search_count must be at least 1".into(),
            ));
        }
        if self.weather.timeout_secs == 0 {
            return Err(ApplicationError::Configuration(
                "weather.timeout_secs must be at least 1".into(),
            ));
        }
        if self.clipboard.command.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(ApplicationError::Configuration(
                "clipboard.command must name a program".into(),
            ));
        }
        if self.storage.key.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "storage.key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_without_sources() {
        let file = write_config("");
        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();

        assert_eq!(config.weather.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.widget.search_count, 5);
        assert_eq!(config.widget.search_language, "zh");
        assert_eq!(config.widget.base_url, "http://localhost:8080/widget");
        assert_eq!(config.storage.key, "obs-weather-widget-setup");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
[weather]
forecast_base_url = "http://localhost:9000/v1"
timeout_secs = 5

[widget]
base_url = "https://example.com/widget.html"
search_count = 8

[storage]
data_dir = "/tmp/overlay-weather-test"

[telemetry]
json = true
"#,
        );
        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();

        assert_eq!(config.weather.forecast_base_url, "http://localhost:9000/v1");
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(
            config.weather.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(config.widget.base_url, "https://example.com/widget.html");
        assert_eq!(config.widget.search_count, 8);
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/tmp/overlay-weather-test"))
        );
        assert!(config.telemetry.json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[widget]\nsearch_count = 8\n");
        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("OVERLAY_WEATHER_WIDGET__SEARCH_COUNT", "3"),
                ("OVERLAY_WEATHER_WIDGET__SEARCH_LANGUAGE", "en"),
                ("UNRELATED_WIDGET__SEARCH_COUNT", "99"),
            ]),
        )
        .unwrap();

        assert_eq!(config.widget.search_count, 3);
        assert_eq!(config.widget.search_language, "en");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load_with_env(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = write_config("[widget]\nsearch_count = \"many\"\n");
        assert!(AppConfig::load_with_env(Some(file.path()), env(&[])).is_err());
    }

    #[test]
    fn validate_rejects_zero_search_count() {
        let mut config = AppConfig::default();
        config.widget.search_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn validate_rejects_empty_clipboard_command() {
        let mut config = AppConfig::default();
        config.clipboard.command.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_base_url() {
        let mut config = AppConfig::default();
        config.widget.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
