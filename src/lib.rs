//! `Nimbus` - weather lookup widget
//!
//! This library resolves a place name to coordinates, fetches a short-range
//! forecast and turns it into the current-conditions panel and five-day
//! strip a host page renders, together with the day selection state.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast_normalizer;
pub mod location_resolver;
pub mod models;
pub mod search;
pub mod selection;
pub mod telemetry;
pub mod weather;
pub mod web;
pub mod widget;

// Re-export core types for public API
pub use crate::config::NimbusConfig;
pub use error::{LookupReason, NimbusError};
pub use forecast_normalizer::{MAX_FORECAST_DAYS, normalize, round_temperature};
pub use location_resolver::LocationResolver;
pub use models::{Condition, CurrentSnapshot, DailySeries, ForecastEntry, Place, RawForecast};
pub use search::{ForecastSearch, SearchOutcome};
pub use selection::ForecastSelection;
pub use weather::{OpenMeteoClient, WeatherProvider};
pub use widget::{WeatherWidget, WidgetSnapshot, WidgetState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, NimbusError>;
