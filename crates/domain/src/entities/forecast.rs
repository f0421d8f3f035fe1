//! Daily forecast data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::Location;

/// Day index the widget displays (0 = today, 1 = tomorrow)
pub const TOMORROW_INDEX: usize = 1;

/// Daily forecast arrays as returned by the forecast API
///
/// All arrays are aligned by day index. The API reports a missing value
/// for a single day as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastDaily {
    /// Forecast dates (local to the location)
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    /// WMO weather codes
    pub weather_code: Vec<Option<i32>>,
    /// Daily maximum temperatures
    pub temperature_2m_max: Vec<Option<f64>>,
    /// Daily minimum temperatures
    pub temperature_2m_min: Vec<Option<f64>>,
}

/// One day picked out of a [`ForecastDaily`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEntry {
    /// Date, when the API supplied one
    pub date: Option<NaiveDate>,
    /// WMO weather code
    pub weather_code: i32,
    /// Maximum temperature
    pub temperature_max: f64,
    /// Minimum temperature
    pub temperature_min: f64,
}

impl ForecastDaily {
    /// Entry at `index`, or `None` if any required value is absent or null
    #[must_use]
    pub fn day(&self, index: usize) -> Option<DailyEntry> {
        Some(DailyEntry {
            date: self.time.get(index).copied(),
            weather_code: self.weather_code.get(index).copied().flatten()?,
            temperature_max: self.temperature_2m_max.get(index).copied().flatten()?,
            temperature_min: self.temperature_2m_min.get(index).copied().flatten()?,
        })
    }

    /// Tomorrow's entry
    #[must_use]
    pub fn tomorrow(&self) -> Option<DailyEntry> {
        self.day(TOMORROW_INDEX)
    }
}

/// A configured location together with its fetched forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationWeather {
    #[serde(flatten)]
    pub location: Location,
    pub weather: ForecastDaily,
}
