//! Geocoding via the Nominatim (OpenStreetMap) search API
//!
//! Shared dependency of the landmark and weather clients: converts a
//! free-text city name into a coordinate pair before the main upstream call
//! can be issued.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::TravelHubError;

const SERVICE: &str = "nominatim";

/// Nominatim's usage policy requires an identifying User-Agent; requests
/// without one get blocked.
const USER_AGENT: &str = "TravelHub/0.1.0 (travel data aggregator)";

const TIMEOUT: Duration = Duration::from_secs(10);

/// A resolved coordinate pair. Ephemeral: consumed immediately by the
/// landmark and weather clients, never returned to API clients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geocoding client for the Nominatim search API
#[derive(Clone)]
pub struct NominatimClient {
    http: Client,
    base_url: String,
}

/// Single search result from Nominatim. Coordinates arrive as JSON strings.
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

impl NominatimResult {
    fn into_coordinate(self) -> Result<Coordinate, TravelHubError> {
        let latitude = self
            .lat
            .parse::<f64>()
            .map_err(|e| TravelHubError::decode(SERVICE, format!("invalid latitude: {e}")))?;
        let longitude = self
            .lon
            .parse::<f64>()
            .map_err(|e| TravelHubError::decode(SERVICE, format!("invalid longitude: {e}")))?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }
}

impl NominatimClient {
    /// Create a new geocoding client
    pub fn new(base_url: String) -> Result<Self, TravelHubError> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TravelHubError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Resolve a city name (optionally qualified by country) to coordinates.
    ///
    /// Takes the first match; zero matches is a `NotFound` error. A single
    /// failed resolution fails the entire calling adapter - no retries.
    pub async fn resolve(
        &self,
        city: &str,
        country: Option<&str>,
    ) -> Result<Coordinate, TravelHubError> {
        let query = match country {
            Some(country) if !country.is_empty() => format!("{city}, {country}"),
            _ => city.to_string(),
        };

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(&query)
        );

        debug!("Geocoding '{}'", query);

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

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| TravelHubError::decode(SERVICE, e.to_string()))?;

        let Some(first) = results.into_iter().next() else {
            return Err(TravelHubError::NotFound { query });
        };

        let coordinate = first.into_coordinate()?;
        debug!(
            "Resolved '{}' to ({}, {})",
            query, coordinate.latitude, coordinate.longitude
        );
        Ok(coordinate)
    }
}
