//! Coarse weather condition categories used for icon and label selection

use std::fmt;

use serde::{Deserialize, Serialize};

/// Condition category derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    #[default]
    Clear,
    PartlyCloudy,
    Rainy,
    Snowy,
}

impl Condition {
    /// Convert a WMO weather code to a condition category.
    /// Codes outside the table fall back to partly cloudy.
    /// See: https://open-meteo.com/en/docs#weathervariables
    #[must_use]
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 | 3 | 45 | 48 => Self::PartlyCloudy,
            51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Self::Rainy,
            // Thunderstorms share the rain icon
            95 | 96 | 99 => Self::Rainy,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snowy,
            _ => Self::PartlyCloudy,
        }
    }

    /// Human-readable label shown next to the current temperature
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Sunny",
            Self::PartlyCloudy => "Mostly cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
        }
    }

    /// Icon name the host page maps to an image
    #[must_use]
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::PartlyCloudy => "cloud-sun",
            Self::Rainy => "cloud-rain",
            Self::Snowy => "cloud-snow",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
