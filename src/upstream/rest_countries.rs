//! Country directory via the REST Countries API

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use crate::TravelHubError;
use crate::models::City;

const SERVICE: &str = "rest-countries";

/// Country directory client
#[derive(Clone)]
pub struct RestCountriesClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryName,
    #[serde(default)]
    cca3: String,
    #[serde(default)]
    capital: Vec<String>,
    /// Currency code to metadata; only the codes are consumed
    #[serde(default)]
    currencies: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    #[serde(default)]
    common: String,
}

impl RestCountriesClient {
    /// Create a new country directory client
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch the full country directory and derive the city list.
    ///
    /// Recomputed on every request; there is no pagination and no cache.
    pub async fn list_cities(&self) -> Result<Vec<City>, TravelHubError> {
        let url = format!(
            "{}/v3.1/all?fields=name,cca3,capital,currencies",
            self.base_url
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

        let countries: Vec<CountryRecord> = response
            .json()
            .await
            .map_err(|e| TravelHubError::decode(SERVICE, e.to_string()))?;

        let cities = cities_from_countries(countries);
        info!("Derived {} cities from country directory", cities.len());
        Ok(cities)
    }
}

/// Derive the city list from the country directory.
///
/// Countries lacking a capital or any currency entry are silently dropped,
/// so every emitted city has a non-empty name and currency. Ids are 1-based
/// positions in upstream iteration order and not stable across calls. For a
/// country with several currencies the chosen code is an arbitrary member of
/// its currency set (map iteration order is unspecified).
fn cities_from_countries(countries: Vec<CountryRecord>) -> Vec<City> {
    let mut cities = Vec::new();
    let mut next_id = 1;

    for country in countries {
        let Some(capital) = country
            .capital
            .into_iter()
            .next()
            .filter(|capital| !capital.is_empty())
        else {
            continue;
        };
        let Some(currency) = country.currencies.keys().next().cloned() else {
            continue;
        };

        cities.push(City {
            id: next_id,
            name: capital,
            three_letter_code: country.cca3,
            currency,
            country: country.name.common,
        });
        next_id += 1;
    }

    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_countries() -> Vec<CountryRecord> {
        serde_json::from_value(json!([
            {
                "name": {"common": "United Kingdom"},
                "cca3": "GBR",
                "capital": ["London"],
                "currencies": {"GBP": {"name": "British pound", "symbol": "£"}}
            },
            {
                "name": {"common": "Antarctica"},
                "cca3": "ATA",
                "capital": [],
                "currencies": {}
            },
            {
                "name": {"common": "Heard Island"},
                "cca3": "HMD",
                "capital": ["No capital"],
                "currencies": {}
            },
            {
                "name": {"common": "Switzerland"},
                "cca3": "CHE",
                "capital": ["Bern"],
                "currencies": {"CHF": {"name": "Swiss franc", "symbol": "Fr."}}
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_countries_without_capital_or_currency_are_dropped() {
        let cities = cities_from_countries(sample_countries());

        assert_eq!(cities.len(), 2);
        assert!(cities.iter().all(|city| !city.name.is_empty()));
        assert!(cities.iter().all(|city| !city.currency.is_empty()));
        assert!(!cities.iter().any(|city| city.three_letter_code == "ATA"));
        assert!(!cities.iter().any(|city| city.three_letter_code == "HMD"));
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let cities = cities_from_countries(sample_countries());

        assert_eq!(cities[0].id, 1);
        assert_eq!(cities[1].id, 2);
        assert_eq!(cities[0].name, "London");
        assert_eq!(cities[1].name, "Bern");
    }

    #[test]
    fn test_multi_currency_country_picks_a_declared_code() {
        let countries: Vec<CountryRecord> = serde_json::from_value(json!([
            {
                "name": {"common": "Panama"},
                "cca3": "PAN",
                "capital": ["Panama City"],
                "currencies": {
                    "PAB": {"name": "Panamanian balboa", "symbol": "B/."},
                    "USD": {"name": "United States dollar", "symbol": "$"}
                }
            }
        ]))
        .unwrap();

        let cities = cities_from_countries(countries);
        assert_eq!(cities.len(), 1);
        // Selection among multiple currencies is arbitrary; membership is the contract.
        assert!(cities[0].currency == "PAB" || cities[0].currency == "USD");
    }

    #[test]
    fn test_empty_capital_string_is_dropped() {
        let countries: Vec<CountryRecord> = serde_json::from_value(json!([
            {
                "name": {"common": "Nowhere"},
                "cca3": "NWH",
                "capital": [""],
                "currencies": {"XXX": {}}
            }
        ]))
        .unwrap();

        assert!(cities_from_countries(countries).is_empty());
    }
}
