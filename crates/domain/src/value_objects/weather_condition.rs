//! Weather conditions and icons derived from WMO weather codes
//!
//! See <https://open-meteo.com/en/docs> for the WMO code reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory holding the per-condition icon files
pub const ICON_DIR: &str = "icons/weather";

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Freezing drizzle (WMO 56, 57)
    FreezingDrizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Freezing rain (WMO 66, 67)
    FreezingRain,
    /// Snow (WMO 71, 73, 75)
    Snow,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Rain showers (WMO 80, 81, 82)
    RainShowers,
    /// Snow showers (WMO 85, 86)
    SnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with hail (WMO 96, 99)
    ThunderstormWithHail,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    #[must_use]
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Display text in the widget's locale (zh-TW)
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "晴朗",
            Self::MainlyClear => "大致晴朗",
            Self::PartlyCloudy => "局部多雲",
            Self::Overcast => "陰天",
            Self::Fog => "有霧",
            Self::Drizzle => "毛毛雨",
            Self::FreezingDrizzle => "凍毛毛雨",
            Self::Rain => "下雨",
            Self::FreezingRain => "凍雨",
            Self::Snow => "下雪",
            Self::SnowGrains => "雪粒",
            Self::RainShowers => "陣雨",
            Self::SnowShowers => "陣雪",
            Self::Thunderstorm => "雷雨",
            Self::ThunderstormWithHail => "雷雨伴有冰雹",
            Self::Unknown => "未知天氣",
        }
    }

    /// Icon used to depict this condition
    #[must_use]
    pub const fn icon(&self) -> WeatherIcon {
        match self {
            Self::ClearSky => WeatherIcon::Clear,
            Self::MainlyClear | Self::PartlyCloudy | Self::Overcast => WeatherIcon::PartlyCloudy,
            Self::Fog => WeatherIcon::Fog,
            Self::Drizzle | Self::FreezingDrizzle => WeatherIcon::Drizzle,
            Self::Rain | Self::FreezingRain => WeatherIcon::Rain,
            Self::Snow | Self::SnowGrains => WeatherIcon::Snow,
            Self::RainShowers => WeatherIcon::Showers,
            Self::SnowShowers => WeatherIcon::SnowShowers,
            Self::Thunderstorm | Self::ThunderstormWithHail => WeatherIcon::Thunderstorm,
            Self::Unknown => WeatherIcon::Unknown,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Icon identifiers, one per file under [`ICON_DIR`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    SnowShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherIcon {
    /// Icon identifier, e.g. `partly-cloudy`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Showers => "showers",
            Self::SnowShowers => "snow-showers",
            Self::Thunderstorm => "thunderstorm",
            Self::Unknown => "unknown",
        }
    }

    /// Icon file name, e.g. `rain.svg`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name())
    }

    /// Icon path relative to the widget page, e.g. `icons/weather/rain.svg`
    #[must_use]
    pub fn path(&self) -> String {
        format!("{ICON_DIR}/{}", self.file_name())
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a WMO weather code to its icon; unknown codes map to [`WeatherIcon::Unknown`]
///
/// # Examples
///
/// ```
/// use domain::value_objects::{WeatherIcon, weather_code_to_icon};
///
/// assert_eq!(weather_code_to_icon(61), WeatherIcon::Rain);
/// assert_eq!(weather_code_to_icon(4), WeatherIcon::Unknown);
/// ```
#[must_use]
pub const fn weather_code_to_icon(code: i32) -> WeatherIcon {
    WeatherCondition::from_wmo_code(code).icon()
}
