//! Weather data sources
//!
//! The widget talks to its collaborators through [`WeatherProvider`]; the
//! Open-Meteo implementation lives in [`open_meteo`].

use async_trait::async_trait;

use crate::Result;
use crate::models::{Place, RawForecast};

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

/// Geocoding and forecast lookups used by the search flow
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Resolve a free-text query to candidate places, best match first.
    /// An empty vector means the service answered without a match.
    async fn geocode(&self, query: &str) -> Result<Vec<Place>>;

    /// Fetch the current snapshot and daily series for a place
    async fn forecast(&self, place: &Place) -> Result<RawForecast>;
}
