//! Hourly weather forecasts via the Open-Meteo API

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::NominatimClient;
use crate::TravelHubError;
use crate::models::{HourlyForecast, WeatherData};

const SERVICE: &str = "open-meteo";

/// Weather forecast client
#[derive(Clone)]
pub struct OpenMeteoClient {
    http: Client,
    geocoder: NominatimClient,
    base_url: String,
}

/// Forecast response from Open-Meteo. The hourly block is four parallel
/// arrays keyed positionally.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize, Default)]
struct HourlyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default, rename = "temperature_2m")]
    temperature: Vec<f64>,
    #[serde(default, rename = "wind_speed_10m")]
    wind_speed: Vec<f64>,
    #[serde(default, rename = "relative_humidity_2m")]
    relative_humidity: Vec<i32>,
}

impl OpenMeteoClient {
    /// Create a new weather forecast client
    pub fn new(http: Client, geocoder: NominatimClient, base_url: String) -> Self {
        Self {
            http,
            geocoder,
            base_url,
        }
    }

    /// Fetch a one-day hourly forecast for a city.
    ///
    /// Resolution is name-only here (no country qualifier is available), so
    /// it may be less precise than the landmark search.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherData, TravelHubError> {
        let coordinate = self
            .geocoder
            .resolve(city, None)
            .await
            .map_err(TravelHubError::geocoding)?;

        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly=temperature_2m,relative_humidity_2m,wind_speed_10m&forecast_days=1",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        debug!(
            "Fetching forecast for ({}, {})",
            coordinate.latitude, coordinate.longitude
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TravelHubError::transport(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TravelHubError::upstream_status(
                SERVICE,
                status.as_u16(),
                body,
            ));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| TravelHubError::decode(SERVICE, e.to_string()))?;

        Ok(WeatherData {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            hourly: zip_hourly(forecast.hourly),
        })
    }
}

/// Zip the four parallel arrays into index-aligned forecast entries.
///
/// The upstream contract does not guarantee equal-length arrays; on a
/// mismatch the sequence is truncated to the shortest array rather than
/// failing the whole call.
fn zip_hourly(hourly: HourlyBlock) -> Vec<HourlyForecast> {
    let len = hourly
        .time
        .len()
        .min(hourly.temperature.len())
        .min(hourly.wind_speed.len())
        .min(hourly.relative_humidity.len());

    if len < hourly.time.len() {
        warn!(
            "Unequal hourly array lengths from {} ({} timestamps, truncating to {})",
            SERVICE,
            hourly.time.len(),
            len
        );
    }

    let mut forecasts = Vec::with_capacity(len);
    for i in 0..len {
        forecasts.push(HourlyForecast {
            time: hourly.time[i].clone(),
            temperature: hourly.temperature[i],
            wind_speed: hourly.wind_speed[i],
            relative_humidity: hourly.relative_humidity[i],
        });
    }
    forecasts
}
