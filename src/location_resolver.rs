//! Location Resolution Module
//!
//! This module resolves free-text place queries into a single structured
//! `Place` using the geocoding collaborator.

use crate::models::Place;
use crate::weather::WeatherProvider;
use crate::{NimbusError, Result};
use tracing::debug;

/// Service for resolving place queries
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a query to the first candidate returned by the geocoder.
    ///
    /// Ranking is the geocoder's business; the first match wins.
    pub async fn resolve(provider: &dyn WeatherProvider, query: &str) -> Result<Place> {
        let query = query.trim();
        if query.is_empty() {
            return Err(NimbusError::validation("Location cannot be empty"));
        }

        debug!("Geocoding location name: {}", query);

        let place = provider
            .geocode(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| NimbusError::no_match(query))?;

        debug!(
            "Found location: {} ({:.4}, {:.4})",
            place.name, place.latitude, place.longitude
        );

        Ok(place)
    }
}
