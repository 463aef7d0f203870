//! Concurrent fan-out aggregator for the composite city endpoint
//!
//! Launches the three independent upstream fetches (landmarks, weather,
//! rates) on separate tasks, waits for all three, and merges the outcomes
//! into one best-effort bundle. A failed fetch never fails the bundle; its
//! error message is embedded as a sibling `<field>_error` string instead.

use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::debug;

use crate::TravelHubError;
use crate::models::{Landmark, RatesData, WeatherData};
use crate::state::AppState;

/// Base currency for the bundle's rates section. Fixed for now; could be
/// derived from the requested city's country.
const BUNDLE_BASE_CURRENCY: &str = "USD";

/// Composite response for one city. Each section carries either its payload
/// or a sibling error string; absent fields are omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct CityBundle {
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Landmark>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<RatesData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates_error: Option<String>,
}

/// Fetch landmarks, weather, and rates for a city concurrently.
///
/// Each fetch runs on its own spawned task and always runs to completion or
/// individual failure; nothing is cancelled when a sibling fails. The join
/// handles are awaited in a fixed order, which fixes only the collection
/// order - each handle is an independent single-value completion future, so
/// completion order stays free. There is no joint timeout: a hang in one
/// upstream call blocks the whole response.
pub async fn fetch_city_bundle(state: Arc<AppState>, city: String, country: String) -> CityBundle {
    let landmarks_task = tokio::spawn({
        let state = Arc::clone(&state);
        let city = city.clone();
        let country = country.clone();
        async move { state.foursquare.fetch_landmarks(&city, &country).await }
    });

    let weather_task = tokio::spawn({
        let state = Arc::clone(&state);
        let city = city.clone();
        async move { state.open_meteo.fetch_weather(&city).await }
    });

    let rates_task = tokio::spawn({
        let state = Arc::clone(&state);
        async move { state.exchange_rate.fetch_rates(BUNDLE_BASE_CURRENCY).await }
    });

    let landmarks = collect(landmarks_task.await);
    let weather = collect(weather_task.await);
    let rates = collect(rates_task.await);

    let mut bundle = CityBundle {
        city,
        country,
        landmarks: None,
        landmarks_error: None,
        weather: None,
        weather_error: None,
        rates: None,
        rates_error: None,
    };

    match landmarks {
        Ok(landmarks) => bundle.landmarks = Some(landmarks),
        Err(message) => bundle.landmarks_error = Some(message),
    }
    match weather {
        Ok(weather) => bundle.weather = Some(weather),
        Err(message) => bundle.weather_error = Some(message),
    }
    match rates {
        Ok(rates) => bundle.rates = Some(rates),
        Err(message) => bundle.rates_error = Some(message),
    }

    debug!(
        "Assembled bundle for {} (landmarks: {}, weather: {}, rates: {})",
        bundle.city,
        bundle.landmarks.is_some(),
        bundle.weather.is_some(),
        bundle.rates.is_some()
    );
    bundle
}

/// Flatten a join outcome into the payload or the error message to embed.
fn collect<T>(joined: Result<Result<T, TravelHubError>, JoinError>) -> Result<T, String> {
    match joined {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(err.to_string()),
        Err(err) => Err(format!("task failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn empty_bundle() -> CityBundle {
        CityBundle {
            city: "London".to_string(),
            country: "England".to_string(),
            landmarks: None,
            landmarks_error: None,
            weather: None,
            weather_error: None,
            rates: None,
            rates_error: None,
        }
    }

    #[test]
    fn test_bundle_omits_absent_fields() {
        let mut bundle = empty_bundle();
        bundle.landmarks = Some(vec![]);
        bundle.rates_error = Some("exchange-rate API error: 500 - boom".to_string());

        let value: Value = serde_json::to_value(&bundle).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["city"], "London");
        assert_eq!(object["country"], "England");
        assert!(object.contains_key("landmarks"));
        assert!(!object.contains_key("landmarks_error"));
        assert!(!object.contains_key("weather"));
        assert!(!object.contains_key("weather_error"));
        assert!(!object.contains_key("rates"));
        assert_eq!(object["rates_error"], "exchange-rate API error: 500 - boom");
    }

    #[test]
    fn test_collect_flattens_adapter_error() {
        let joined: Result<Result<(), TravelHubError>, JoinError> = Ok(Err(
            TravelHubError::upstream_status("open-meteo", 503, "unavailable".to_string()),
        ));
        let collected = collect(joined);
        assert_eq!(
            collected.unwrap_err(),
            "open-meteo API error: 503 - unavailable"
        );
    }
}
