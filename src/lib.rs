//! `TravelHub` - backend aggregator for travel data
//!
//! Accepts client HTTP requests for cities, landmarks, weather, and
//! currency rates, fans each request out to third-party public APIs, and
//! normalizes their heterogeneous response shapes into a small set of
//! stable JSON contracts.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod upstream;
pub mod web;

// Re-export core types for public API
pub use aggregator::CityBundle;
pub use config::AppConfig;
pub use error::TravelHubError;
pub use models::{City, HourlyForecast, Landmark, RatesData, WeatherData};
pub use state::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
