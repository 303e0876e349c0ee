//! Forecast Normalization Module
//!
//! Turns a raw multi-day forecast into the bounded, display-ready list of
//! day cards: labels per timezone, a condition category and a rounded
//! temperature. Pure and deterministic given its inputs.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::models::{Condition, ForecastEntry, RawForecast};
use crate::{NimbusError, Result};

/// Maximum number of day cards produced
pub const MAX_FORECAST_DAYS: usize = 5;

/// Timezone used when none is supplied
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Build the day cards for a forecast.
///
/// Index 0 takes its reading from the live snapshot when one is present, so
/// "today" shows the current temperature while later days show the daily
/// maximum. Days the provider reported without a reading are skipped.
pub fn normalize(raw: &RawForecast, timezone: &str) -> Result<Vec<ForecastEntry>> {
    let daily = &raw.daily;
    if daily.is_empty() {
        return Err(NimbusError::NoForecastData);
    }

    let tz = resolve_timezone(timezone);
    let retained = daily.len().min(MAX_FORECAST_DAYS);
    debug!(
        "Normalizing {} of {} forecast days in {}",
        retained,
        daily.len(),
        tz
    );

    let mut entries = Vec::with_capacity(retained);
    for (index, date) in daily.time.iter().take(retained).enumerate() {
        let reading = match (index, raw.current) {
            (0, Some(current)) => Some((current.temperature, current.weather_code)),
            _ => daily_reading(raw, index)?,
        };
        let Some((temperature, weather_code)) = reading else {
            warn!("Skipping forecast day {} without a reading", date);
            continue;
        };

        let day_start = local_day_start(parse_iso_date(date)?, tz);

        entries.push(ForecastEntry {
            id: date.clone(),
            day_label: day_start.format("%a").to_string(),
            date_label: day_start.format("%b %-d").to_string(),
            full_date_label: day_start.format("%A, %B %-d").to_string(),
            condition: Condition::from_wmo_code(weather_code),
            temperature: round_temperature(temperature),
        });
    }

    if entries.is_empty() {
        return Err(NimbusError::NoForecastData);
    }
    Ok(entries)
}

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round_temperature(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Parse a `YYYY-MM-DD` calendar date. No time of day is attached, so the
/// date never shifts with the host's local zone.
pub fn parse_iso_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| NimbusError::forecast(format!("Invalid forecast date '{date}': {e}")))
}

/// Resolve an IANA identifier, falling back to UTC when empty or unknown.
#[must_use]
pub fn resolve_timezone(timezone: &str) -> Tz {
    let name = if timezone.trim().is_empty() {
        DEFAULT_TIMEZONE
    } else {
        timezone.trim()
    };

    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("Unknown timezone '{}', falling back to {}", name, DEFAULT_TIMEZONE);
        Tz::UTC
    })
}

/// Reading for one day; `Ok(None)` when the provider sent nulls for it.
fn daily_reading(raw: &RawForecast, index: usize) -> Result<Option<(f64, i32)>> {
    let temperature = raw.daily.temperature_max.get(index);
    let weather_code = raw.daily.weather_code.get(index);

    match (temperature, weather_code) {
        (Some(&temperature), Some(&weather_code)) => Ok(temperature.zip(weather_code)),
        _ => Err(NimbusError::forecast(format!(
            "Daily series is shorter than its dates (missing day {index})"
        ))),
    }
}

/// Anchor a calendar date at the zone's local midnight. The provider already
/// expresses daily dates in the location's zone, so the labels keep the
/// calendar day. Zones that skip midnight on a DST change use the first
/// valid hour of that day.
fn local_day_start(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    (0..24)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| tz.from_local_datetime(&date.and_time(time)).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
