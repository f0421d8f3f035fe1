//! Temperature unit value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Unit used for forecast temperatures
///
/// String forms are the exact lowercase literals `celsius` and
/// `fahrenheit`; nothing else parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius (API default)
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Literal used in URLs, persisted state and API requests
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Degree symbol appended to rendered temperatures
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Match an exact literal, returning `None` for anything else
    #[must_use]
    pub fn from_literal(value: &str) -> Option<Self> {
        match value {
            "celsius" => Some(Self::Celsius),
            "fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s).ok_or_else(|| DomainError::InvalidTemperatureUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_celsius() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
    }

    #[test]
    fn symbols() {
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
    }

    #[test]
    fn parses_exact_literals_only() {
        assert_eq!(
            "fahrenheit".parse::<TemperatureUnit>().unwrap(),
            TemperatureUnit::Fahrenheit
        );
        assert_eq!(
            "celsius".parse::<TemperatureUnit>().unwrap(),
            TemperatureUnit::Celsius
        );
        assert!("Celsius".parse::<TemperatureUnit>().is_err());
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
        assert!("".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_literals() {
        let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(json, "\"fahrenheit\"");
        let unit: TemperatureUnit = serde_json::from_str("\"celsius\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn display_matches_literal() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_string(), "fahrenheit");
    }
}
