//! Shared application state: one client per upstream service
//!
//! Clients are constructed once from explicit configuration and shared
//! across requests behind an `Arc`. There is no other cross-request state:
//! no cache, no sessions, no counters.

use reqwest::Client;

use crate::TravelHubError;
use crate::config::AppConfig;
use crate::upstream::{
    ExchangeRateClient, FoursquareClient, NominatimClient, OpenMeteoClient, RestCountriesClient,
};

/// Upstream clients shared by all request handlers
pub struct AppState {
    pub foursquare: FoursquareClient,
    pub open_meteo: OpenMeteoClient,
    pub exchange_rate: ExchangeRateClient,
    pub rest_countries: RestCountriesClient,
}

impl AppState {
    /// Build all upstream clients from configuration.
    ///
    /// The geocoding client carries its own timeout and User-Agent; the
    /// remaining upstream calls share one client with no timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, TravelHubError> {
        let geocoder = NominatimClient::new(config.upstream.nominatim_url.clone())?;

        let http = Client::builder()
            .build()
            .map_err(|e| TravelHubError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            foursquare: FoursquareClient::new(
                http.clone(),
                geocoder.clone(),
                config.upstream.foursquare_url.clone(),
                config.foursquare_api_key.clone(),
            ),
            open_meteo: OpenMeteoClient::new(
                http.clone(),
                geocoder,
                config.upstream.open_meteo_url.clone(),
            ),
            exchange_rate: ExchangeRateClient::new(
                http.clone(),
                config.upstream.exchange_rate_url.clone(),
                config.exchange_rate_api_key.clone(),
            ),
            rest_countries: RestCountriesClient::new(
                http,
                config.upstream.rest_countries_url.clone(),
            ),
        })
    }
}
