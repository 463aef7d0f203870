//! Configuration for the `TravelHub` backend
//!
//! Loaded from an optional config file plus environment variables
//! (`PORT`, `FOURSQUARE_API_KEY`, `EXCHANGE_RATE_API_KEY`,
//! `UPSTREAM__*_URL`). All credentials flow into adapter constructors as
//! explicit values; nothing reads the process environment after startup.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration for the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listening port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Combined Foursquare credential (`CLIENT_ID+CLIENT_SECRET`)
    #[serde(default)]
    pub foursquare_api_key: String,
    /// ExchangeRate-API provider credential
    #[serde(default)]
    pub exchange_rate_api_key: String,
    /// Upstream service base URLs
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Base URLs of the upstream services. Defaults point at the real
/// providers; tests override them to target a local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    #[serde(default = "default_foursquare_url")]
    pub foursquare_url: String,
    #[serde(default = "default_open_meteo_url")]
    pub open_meteo_url: String,
    #[serde(default = "default_exchange_rate_url")]
    pub exchange_rate_url: String,
    #[serde(default = "default_rest_countries_url")]
    pub rest_countries_url: String,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_foursquare_url() -> String {
    "https://api.foursquare.com".to_string()
}

fn default_open_meteo_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_exchange_rate_url() -> String {
    "https://v6.exchangerate-api.com".to_string()
}

fn default_rest_countries_url() -> String {
    "https://restcountries.com".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            nominatim_url: default_nominatim_url(),
            foursquare_url: default_foursquare_url(),
            open_meteo_url: default_open_meteo_url(),
            exchange_rate_url: default_exchange_rate_url(),
            rest_countries_url: default_rest_countries_url(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            foursquare_api_key: String::new(),
            exchange_rate_api_key: String::new(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional config file and the environment
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()
            .with_context(|| "Failed to read configuration")?;

        config
            .try_deserialize()
            .with_context(|| "Invalid configuration")
    }
}
