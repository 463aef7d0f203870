//! Currency conversion rates via the ExchangeRate-API v6

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::TravelHubError;
use crate::models::RatesData;

const SERVICE: &str = "exchange-rate";

/// Currency conversion rate client
#[derive(Clone)]
pub struct ExchangeRateClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base_code: String,
    conversion_rates: HashMap<String, f64>,
    time_last_update_unix: i64,
}

impl LatestRatesResponse {
    fn into_rates(self) -> Result<RatesData, TravelHubError> {
        let timestamp = DateTime::from_timestamp(self.time_last_update_unix, 0).ok_or_else(|| {
            TravelHubError::decode(
                SERVICE,
                format!("invalid update timestamp: {}", self.time_last_update_unix),
            )
        })?;

        Ok(RatesData {
            base_currency: self.base_code,
            rates: self.conversion_rates,
            timestamp,
        })
    }
}

impl ExchangeRateClient {
    /// Create a new rates client
    pub fn new(http: Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Fetch the latest conversion rates for a base currency.
    ///
    /// The base currency is passed through without local validation: an
    /// invalid code surfaces as whatever error the upstream returns.
    pub async fn fetch_rates(&self, base_currency: &str) -> Result<RatesData, TravelHubError> {
        if self.api_key.is_empty() {
            return Err(TravelHubError::config(
                "exchange-rate API key is not configured",
            ));
        }

        let url = format!(
            "{}/v6/{}/latest/{}",
            self.base_url, self.api_key, base_currency
        );

        debug!("Fetching rates for base currency {}", base_currency);

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

        let latest: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| TravelHubError::decode(SERVICE, e.to_string()))?;

        latest.into_rates()
    }
}
