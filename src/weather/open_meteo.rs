//! Open-Meteo client
//!
//! HTTP client for the Open-Meteo geocoding and forecast APIs. Neither
//! endpoint requires an API key.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::WeatherProvider;
use crate::config::WeatherConfig;
use crate::models::{CurrentSnapshot, DailySeries, Place, RawForecast};
use crate::{NimbusError, Result};

const USER_AGENT: &str = concat!("Nimbus/", env!("CARGO_PKG_VERSION"));

/// Open-Meteo HTTP client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new client with the given configuration
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| NimbusError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn geocode_url(&self, query: &str) -> String {
        format!(
            "{}/search?name={}&count=1&language={}&format=json",
            self.config.geocoding_base_url.trim_end_matches('/'),
            urlencoding::encode(query),
            urlencoding::encode(&self.config.language)
        )
    }

    fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&daily=weathercode,temperature_2m_max&forecast_days={}&temperature_unit=celsius&timezone=auto",
            self.config.forecast_base_url.trim_end_matches('/'),
            latitude,
            longitude,
            self.config.forecast_days
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Vec<Place>> {
        let url = self.geocode_url(query);
        debug!("Geocoding request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NimbusError::lookup_unavailable(query, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Geocoding returned status {}", status);
            return Err(NimbusError::lookup_unavailable(
                query,
                format!("status {status}"),
            ));
        }

        let body: wire::GeocodingResponse = response.json().await.map_err(|e| {
            NimbusError::lookup_unavailable(query, format!("invalid geocoding response: {e}"))
        })?;

        let places: Vec<Place> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Place::from)
            .collect();

        debug!("Geocoding returned {} candidate(s)", places.len());
        Ok(places)
    }

    #[instrument(skip(self, place), fields(lat = place.latitude, lon = place.longitude))]
    async fn forecast(&self, place: &Place) -> Result<RawForecast> {
        let url = self.forecast_url(place.latitude, place.longitude);
        debug!("Forecast request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NimbusError::forecast(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Forecast returned status {}", status);
            return Err(NimbusError::forecast(format!("status {status}")));
        }

        let body: wire::ForecastResponse = response
            .json()
            .await
            .map_err(|e| NimbusError::forecast(format!("invalid forecast response: {e}")))?;

        info!(
            "Retrieved {}-day forecast for {} in {:.3}s",
            body.daily.time.len(),
            place.format_coordinates(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(body.into())
    }
}

/// Open-Meteo response structures and conversion into domain models
mod wire {
    use serde::Deserialize;

    use super::{CurrentSnapshot, DailySeries, Place, RawForecast};

    /// Geocoding response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub admin1: Option<String>,
        pub timezone: Option<String>,
    }

    impl From<GeocodingResult> for Place {
        fn from(result: GeocodingResult) -> Self {
            Place {
                name: result.name,
                admin1: result.admin1,
                country: result.country,
                latitude: result.latitude,
                longitude: result.longitude,
                timezone: result.timezone,
            }
        }
    }

    /// Forecast response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub timezone: String,
        pub current_weather: Option<CurrentWeather>,
        #[serde(default)]
        pub daily: DailyData,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f64,
        #[serde(alias = "weather_code")]
        pub weathercode: i32,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct DailyData {
        #[serde(default)]
        pub time: Vec<String>,
        #[serde(default, alias = "weather_code")]
        pub weathercode: Vec<Option<i32>>,
        #[serde(default)]
        pub temperature_2m_max: Vec<Option<f64>>,
    }

    impl From<ForecastResponse> for RawForecast {
        fn from(response: ForecastResponse) -> Self {
            RawForecast {
                timezone: response.timezone,
                current: response.current_weather.map(|current| CurrentSnapshot {
                    temperature: current.temperature,
                    weather_code: current.weathercode,
                }),
                daily: DailySeries {
                    time: response.daily.time,
                    weather_code: response.daily.weathercode,
                    temperature_max: response.daily.temperature_2m_max,
                },
            }
        }
    }
}
