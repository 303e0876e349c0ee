//! Place model for resolved locations and their display label

use serde::{Deserialize, Serialize};

/// A place resolved from a free-text query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    /// Place name (city, town, etc.)
    pub name: String,
    /// First-level administrative region (state, province)
    pub admin1: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone identifier, when the geocoder knows it
    pub timezone: Option<String>,
}

impl Place {
    /// Create a place with only a name and coordinates
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            admin1: None,
            country: None,
            latitude,
            longitude,
            timezone: None,
        }
    }

    /// Label shown above the current conditions, e.g. "Montreal, Quebec, Canada".
    ///
    /// The region is skipped when it repeats the place name (city-states,
    /// "Quebec, Quebec").
    #[must_use]
    pub fn display_label(&self) -> String {
        let mut parts = vec![self.name.as_str()];

        if let Some(admin1) = non_empty(&self.admin1).filter(|a| *a != self.name) {
            parts.push(admin1);
        }

        if let Some(country) = non_empty(&self.country) {
            parts.push(country);
        }

        parts.join(", ")
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
