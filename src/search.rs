//! Search flow: resolve a place, fetch its forecast and build the day cards.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::Result;
use crate::forecast_normalizer::{self, DEFAULT_TIMEZONE};
use crate::location_resolver::LocationResolver;
use crate::models::{ForecastEntry, Place};
use crate::weather::WeatherProvider;

/// Result of one successful search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub place: Place,
    /// e.g. "Montreal, Quebec, Canada"
    pub location_label: String,
    pub entries: Vec<ForecastEntry>,
}

/// Chains the two network calls and the normalizer
#[derive(Clone)]
pub struct ForecastSearch {
    provider: Arc<dyn WeatherProvider>,
}

impl ForecastSearch {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Run a full lookup for `query`.
    ///
    /// The normalizer uses the forecast's timezone, then the geocoder's, then UTC.
    #[instrument(skip(self))]
    pub async fn run(&self, query: &str) -> Result<SearchOutcome> {
        let place = LocationResolver::resolve(self.provider.as_ref(), query).await?;
        let raw = self.provider.forecast(&place).await?;

        let timezone = [raw.timezone.as_str(), place.timezone.as_deref().unwrap_or_default()]
            .into_iter()
            .find(|tz| !tz.is_empty())
            .unwrap_or(DEFAULT_TIMEZONE);

        let entries = forecast_normalizer::normalize(&raw, timezone)?;
        let location_label = place.display_label();

        if let Some(today) = entries.first() {
            info!(
                "Loaded {} forecast day(s) for {} (now {}, {})",
                entries.len(),
                location_label,
                today.format_temperature(),
                today.condition
            );
        }

        Ok(SearchOutcome {
            place,
            location_label,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, CurrentSnapshot, DailySeries, RawForecast};
    use crate::NimbusError;
    use async_trait::async_trait;

    struct StubProvider {
        place: Place,
        forecast: RawForecast,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn geocode(&self, _query: &str) -> Result<Vec<Place>> {
            Ok(vec![self.place.clone()])
        }

        async fn forecast(&self, _place: &Place) -> Result<RawForecast> {
            Ok(self.forecast.clone())
        }
    }

    fn montreal() -> Place {
        Place {
            name: "Montreal".to_string(),
            admin1: Some("Quebec".to_string()),
            country: Some("Canada".to_string()),
            latitude: 45.5,
            longitude: -73.6,
            timezone: Some("America/Toronto".to_string()),
        }
    }

    fn five_days() -> DailySeries {
        DailySeries {
            time: (1..=5).map(|d| format!("2024-01-0{d}")).collect(),
            weather_code: [0, 1, 2, 3, 61].map(Some).to_vec(),
            temperature_max: [-1.0, 0.0, 1.0, 2.0, 3.0].map(Some).to_vec(),
        }
    }

    #[tokio::test]
    async fn test_run_builds_outcome() {
        let search = ForecastSearch::new(Arc::new(StubProvider {
            place: montreal(),
            forecast: RawForecast {
                timezone: "America/Toronto".to_string(),
                current: Some(CurrentSnapshot {
                    temperature: -2.4,
                    weather_code: 71,
                }),
                daily: five_days(),
            },
        }));

        let outcome = search.run("Montreal").await.unwrap();
        assert_eq!(outcome.location_label, "Montreal, Quebec, Canada");
        assert_eq!(outcome.entries.len(), 5);
        assert_eq!(outcome.entries[0].condition, Condition::Snowy);
        assert_eq!(outcome.entries[0].temperature, -2.4);
        assert_eq!(outcome.entries[0].day_label, "Mon");
    }

    #[tokio::test]
    async fn test_run_falls_back_to_place_timezone() {
        let search = ForecastSearch::new(Arc::new(StubProvider {
            place: montreal(),
            forecast: RawForecast {
                timezone: String::new(),
                current: None,
                daily: five_days(),
            },
        }));

        let outcome = search.run("Montreal").await.unwrap();
        assert_eq!(outcome.entries[0].full_date_label, "Monday, January 1");
    }

    #[tokio::test]
    async fn test_run_reports_empty_forecast() {
        let search = ForecastSearch::new(Arc::new(StubProvider {
            place: montreal(),
            forecast: RawForecast::default(),
        }));

        let err = search.run("Montreal").await.unwrap_err();
        assert!(matches!(err, NimbusError::NoForecastData));
    }
}
