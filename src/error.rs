//! Error types and handling for the Nimbus weather widget

use std::fmt;

use thiserror::Error;

/// Why a place lookup did not produce a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupReason {
    /// The geocoding service could not be reached or answered with a non-OK status
    Unavailable(String),
    /// The geocoding service answered but returned no candidates
    NoMatch,
}

impl fmt::Display for LookupReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupReason::Unavailable(detail) => write!(f, "service unavailable ({detail})"),
            LookupReason::NoMatch => write!(f, "no matching place"),
        }
    }
}

/// Main error type for the Nimbus widget
#[derive(Error, Debug)]
pub enum NimbusError {
    /// Place resolution failed (network, non-OK response or empty match)
    #[error("Location lookup failed for '{query}': {reason}")]
    LookupFailure { query: String, reason: LookupReason },

    /// Forecast retrieval failed (network, non-OK response or malformed payload)
    #[error("Forecast request failed: {message}")]
    ForecastFetchFailure { message: String },

    /// The forecast arrived but carried no daily entries
    #[error("No forecast data available")]
    NoForecastData,

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Anything else
    #[error("Unexpected error: {message}")]
    Unknown { message: String },
}

impl NimbusError {
    /// Create a lookup error for an unreachable or failing geocoding service
    pub fn lookup_unavailable<Q: Into<String>, S: Into<String>>(query: Q, detail: S) -> Self {
        Self::LookupFailure {
            query: query.into(),
            reason: LookupReason::Unavailable(detail.into()),
        }
    }

    /// Create a lookup error for a query without candidates
    pub fn no_match<Q: Into<String>>(query: Q) -> Self {
        Self::LookupFailure {
            query: query.into(),
            reason: LookupReason::NoMatch,
        }
    }

    /// Create a new forecast fetch error
    pub fn forecast<S: Into<String>>(message: S) -> Self {
        Self::ForecastFetchFailure {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catch-all error
    pub fn unknown<S: Into<String>>(message: S) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Get the status line shown to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            NimbusError::LookupFailure {
                reason: LookupReason::Unavailable(_),
                ..
            } => "Unable to look up that location right now.".to_string(),
            NimbusError::LookupFailure {
                reason: LookupReason::NoMatch,
                ..
            } => "No matching location found. Try a different search term.".to_string(),
            NimbusError::ForecastFetchFailure { .. } => {
                "Unable to load the forecast for that location.".to_string()
            }
            NimbusError::NoForecastData => {
                "No forecast data available for that location.".to_string()
            }
            NimbusError::Validation { message } => format!("Invalid input: {message}"),
            NimbusError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            NimbusError::Unknown { .. } => {
                "Something went wrong while loading the weather data.".to_string()
            }
        }
    }
}

impl From<anyhow::Error> for NimbusError {
    fn from(err: anyhow::Error) -> Self {
        NimbusError::unknown(format!("{err:#}"))
    }
}
