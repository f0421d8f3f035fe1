//! Widget configuration
//!
//! The single configuration object shared by the setup surface (live state,
//! persisted blob) and the widget (decoded from its URL).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::value_objects::{Location, TemperatureUnit};

/// Cycle interval used when none (or an unusable one) is configured
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Shortest accepted cycle interval
pub const MIN_INTERVAL_MS: u64 = 1000;

/// Locations, cycle interval and temperature unit
///
/// An empty location list is representable; the widget treats it as a
/// configuration error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Locations in display order
    pub locations: Vec<Location>,
    /// Cycle interval in milliseconds
    pub interval: u64,
    /// Temperature unit
    pub unit: TemperatureUnit,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            interval: DEFAULT_INTERVAL_MS,
            unit: TemperatureUnit::default(),
        }
    }
}

impl WidgetConfig {
    /// Cycle interval as a `Duration`
    #[must_use]
    pub const fn interval_duration(&self) -> Duration {
        Duration::from_millis(self.interval)
    }

    /// Whether at least one location is configured
    #[must_use]
    pub fn has_locations(&self) -> bool {
        !self.locations.is_empty()
    }

    /// Validate an untrusted JSON object field by field
    ///
    /// Returns `None` when `value` is not an object. Otherwise every field
    /// falls back independently: locations that fail validation are
    /// dropped, a non-numeric or too-short interval keeps the default, and an
    /// unrecognized unit keeps the default.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut config = Self::default();

        if let Some(locations) = object.get("locations").and_then(Value::as_array) {
            config.locations = locations
                .iter()
                .filter_map(Location::from_json_value)
                .collect();
        }

        if let Some(interval) = object
            .get("interval")
            .and_then(Value::as_f64)
            .and_then(interval_from_number)
        {
            config.interval = interval;
        }

        if let Some(unit) = object
            .get("unit")
            .and_then(Value::as_str)
            .and_then(TemperatureUnit::from_literal)
        {
            config.unit = unit;
        }

        Some(config)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interval_from_number(ms: f64) -> Option<u64> {
    #[allow(clippy::cast_precision_loss)]
    let floor = MIN_INTERVAL_MS as f64;
    (ms.is_finite() && ms >= floor && ms <= u64::MAX as f64).then(|| ms as u64)
}

/// Parse a textual interval the way form inputs and URL parameters are read
///
/// Leading whitespace, an optional sign and the leading run of digits are
/// used (`"7500ms"` reads as 7500). Non-numeric input and values below
/// [`MIN_INTERVAL_MS`] fall back to [`DEFAULT_INTERVAL_MS`].
///
/// # Examples
///
/// ```
/// use domain::entities::parse_interval;
///
/// assert_eq!(parse_interval("10000"), 10000);
/// assert_eq!(parse_interval("abc"), 5000);
/// assert_eq!(parse_interval("500"), 5000);
/// ```
#[must_use]
pub fn parse_interval(raw: &str) -> u64 {
    leading_integer(raw)
        .and_then(|value| u64::try_from(value).ok())
        .filter(|value| *value >= MIN_INTERVAL_MS)
        .unwrap_or(DEFAULT_INTERVAL_MS)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config() {
        let config = WidgetConfig::default();
        assert!(config.locations.is_empty());
        assert_eq!(config.interval, 5000);
        assert_eq!(config.unit, TemperatureUnit::Celsius);
        assert!(!config.has_locations());
        assert_eq!(config.interval_duration(), Duration::from_secs(5));
    }

    #[test]
    fn from_json_value_keeps_valid_state_unchanged() {
        let value = json!({
            "locations": [{"name": "Taipei", "lat": 25, "lon": 121.5}],
            "interval": 10000,
            "unit": "fahrenheit"
        });
        let config = WidgetConfig::from_json_value(&value).unwrap();
        assert_eq!(
            config,
            WidgetConfig {
                locations: vec![Location::new("Taipei", 25.0, 121.5).unwrap()],
                interval: 10000,
                unit: TemperatureUnit::Fahrenheit,
            }
        );
    }

    #[test]
    fn from_json_value_interval_below_floor_keeps_default() {
        let config = WidgetConfig::from_json_value(&json!({"interval": 500})).unwrap();
        assert_eq!(config.interval, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn from_json_value_interval_must_be_numeric() {
        let config = WidgetConfig::from_json_value(&json!({"interval": "8000"})).unwrap();
        assert_eq!(config.interval, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn from_json_value_interval_at_floor_is_accepted() {
        let config = WidgetConfig::from_json_value(&json!({"interval": 1000})).unwrap();
        assert_eq!(config.interval, 1000);
    }

    #[test]
    fn from_json_value_filters_invalid_locations() {
        let value = json!({
            "locations": [
                {"name": "Taipei", "lat": 25, "lon": 121.5},
                {"name": "Bad", "lat": 100, "lon": 0},
                {"lat": 1, "lon": 1},
                "junk",
                {"name": "Tokyo", "lat": 35.68, "lon": 139.69}
            ]
        });
        let config = WidgetConfig::from_json_value(&value).unwrap();
        let names: Vec<_> = config.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Taipei", "Tokyo"]);
    }

    #[test]
    fn from_json_value_non_array_locations_keep_default() {
        let config = WidgetConfig::from_json_value(&json!({"locations": "Taipei"})).unwrap();
        assert!(config.locations.is_empty());
    }

    #[test]
    fn from_json_value_unknown_unit_keeps_default() {
        let config = WidgetConfig::from_json_value(&json!({"unit": "kelvin"})).unwrap();
        assert_eq!(config.unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn from_json_value_rejects_non_objects() {
        assert!(WidgetConfig::from_json_value(&json!(null)).is_none());
        assert!(WidgetConfig::from_json_value(&json!([1, 2])).is_none());
        assert!(WidgetConfig::from_json_value(&json!("config")).is_none());
    }

    #[test]
    fn parse_interval_reads_leading_digits() {
        assert_eq!(parse_interval("7500ms"), 7500);
        assert_eq!(parse_interval("  2000"), 2000);
        assert_eq!(parse_interval("+3000"), 3000);
    }

    #[test]
    fn parse_interval_falls_back() {
        assert_eq!(parse_interval(""), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval("ms"), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval("0"), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval("-4000"), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval("999"), DEFAULT_INTERVAL_MS);
        assert_eq!(
            parse_interval("99999999999999999999999"),
            DEFAULT_INTERVAL_MS
        );
    }

    #[test]
    fn serde_shape_matches_persisted_blob() {
        let config = WidgetConfig {
            locations: vec![Location::new("Taipei", 25.0, 121.5).unwrap()],
            interval: 10000,
            unit: TemperatureUnit::Fahrenheit,
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "locations": [{"name": "Taipei", "lat": 25.0, "lon": 121.5}],
                "interval": 10000,
                "unit": "fahrenheit"
            })
        );
    }
}
