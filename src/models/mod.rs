//! Data models for the Nimbus widget
//!
//! This module contains the core domain models organized by concern:
//! - Location: resolved places and their display label
//! - Condition: coarse weather categories derived from WMO codes
//! - Forecast: raw forecast payloads and display-ready entries

pub mod condition;
pub mod forecast;
pub mod location;

// Re-export all public types for convenient access
pub use condition::Condition;
pub use forecast::{CurrentSnapshot, DailySeries, ForecastEntry, RawForecast};
pub use location::Place;
