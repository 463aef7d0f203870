//! Landmark search via the Foursquare venues API (v2)

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::NominatimClient;
use crate::TravelHubError;
use crate::models::Landmark;

const SERVICE: &str = "foursquare";

/// Fixed search parameters for the venues/explore call
const API_VERSION: &str = "20240101";
const SEARCH_RADIUS_METERS: u32 = 5000;
const SEARCH_SECTION: &str = "sights";
const RESULT_LIMIT: u32 = 20;

/// Landmark search client
#[derive(Clone)]
pub struct FoursquareClient {
    http: Client,
    geocoder: NominatimClient,
    base_url: String,
    /// Combined credential in `CLIENT_ID+CLIENT_SECRET` form; parsed per call
    credential: String,
}

/// Split a combined v2 credential on the first `+` into (id, secret).
///
/// A credential without a separator is used as both halves; the upstream,
/// not this function, decides whether the halves are valid.
pub fn parse_v2_api_key(api_key: &str) -> (&str, &str) {
    match api_key.split_once('+') {
        Some((client_id, client_secret)) => (client_id, client_secret),
        None => (api_key, api_key),
    }
}

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    response: ExploreBody,
}

#[derive(Debug, Deserialize, Default)]
struct ExploreBody {
    #[serde(default)]
    groups: Vec<VenueGroup>,
}

#[derive(Debug, Deserialize)]
struct VenueGroup {
    #[serde(default)]
    items: Vec<VenueItem>,
}

#[derive(Debug, Deserialize)]
struct VenueItem {
    venue: Venue,
}

#[derive(Debug, Deserialize)]
struct Venue {
    name: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    location: VenueLocation,
}

#[derive(Debug, Deserialize, Default)]
struct VenueLocation {
    #[serde(default)]
    address: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lng: f64,
}

impl From<Venue> for Landmark {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            address: venue.location.address,
            latitude: venue.location.lat,
            longitude: venue.location.lng,
            rating: venue.rating,
        }
    }
}

impl FoursquareClient {
    /// Create a new landmark search client
    pub fn new(
        http: Client,
        geocoder: NominatimClient,
        base_url: String,
        credential: String,
    ) -> Self {
        Self {
            http,
            geocoder,
            base_url,
            credential,
        }
    }

    /// Fetch up to 20 sights near a city.
    ///
    /// Resolves the city to coordinates first; a geocoding failure fails the
    /// whole call. An upstream response with zero result groups yields an
    /// empty list, not an error.
    pub async fn fetch_landmarks(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Vec<Landmark>, TravelHubError> {
        let coordinate = self
            .geocoder
            .resolve(city, (!country.is_empty()).then_some(country))
            .await
            .map_err(TravelHubError::geocoding)?;

        if self.credential.is_empty() {
            return Err(TravelHubError::config("foursquare API key is not configured"));
        }
        let (client_id, client_secret) = parse_v2_api_key(&self.credential);

        let url = format!("{}/v2/venues/explore", self.base_url);
        debug!(
            "Searching venues near ({}, {})",
            coordinate.latitude, coordinate.longitude
        );

        let ll = format!("{},{}", coordinate.latitude, coordinate.longitude);
        let radius = SEARCH_RADIUS_METERS.to_string();
        let limit = RESULT_LIMIT.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("ll", ll.as_str()),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("v", API_VERSION),
                ("radius", radius.as_str()),
                ("section", SEARCH_SECTION),
                ("limit", limit.as_str()),
            ])
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

        let explore: ExploreResponse = response
            .json()
            .await
            .map_err(|e| TravelHubError::decode(SERVICE, e.to_string()))?;

        let landmarks = venues_to_landmarks(explore);
        info!("Found {} landmarks near {}", landmarks.len(), city);
        Ok(landmarks)
    }
}

/// The explore response groups venues; only the first group is relevant.
fn venues_to_landmarks(explore: ExploreResponse) -> Vec<Landmark> {
    explore
        .response
        .groups
        .into_iter()
        .next()
        .map(|group| {
            group
                .items
                .into_iter()
                .map(|item| item.venue.into())
                .collect()
        })
        .unwrap_or_default()
}
