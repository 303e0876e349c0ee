//! Forecast payload and display entry models

use serde::{Deserialize, Serialize};

use super::Condition;

/// Live reading reported alongside the daily series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentSnapshot {
    /// Temperature in Celsius
    pub temperature: f64,
    /// WMO weather code
    pub weather_code: i32,
}

/// Parallel daily sequences; index `i` of each refers to the same calendar day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// ISO calendar dates (`YYYY-MM-DD`)
    pub time: Vec<String>,
    /// WMO weather codes; `None` where the provider reported no value
    pub weather_code: Vec<Option<i32>>,
    /// Daily maximum temperatures in Celsius; `None` where missing
    pub temperature_max: Vec<Option<f64>>,
}

impl DailySeries {
    /// Number of days in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Multi-day forecast as delivered by the weather provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForecast {
    /// IANA timezone the daily dates are expressed in (may be empty)
    pub timezone: String,
    /// Current conditions, when requested and available
    pub current: Option<CurrentSnapshot>,
    /// Daily series
    pub daily: DailySeries,
}

/// Display-ready forecast for one day card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// The ISO date, unique within one result set
    pub id: String,
    /// Short weekday, e.g. "Mon"
    pub day_label: String,
    /// Short month and day, e.g. "Jan 5"
    pub date_label: String,
    /// Long weekday, month and day, e.g. "Monday, January 5"
    pub full_date_label: String,
    pub condition: Condition,
    /// Temperature in Celsius, rounded to one decimal place
    pub temperature: f64,
}

impl ForecastEntry {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }
}
