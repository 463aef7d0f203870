//! Canonical data models for the TravelHub API
//!
//! These are the normalized shapes returned to clients, independent of any
//! single upstream's schema:
//! - City: capital city entry from the country directory
//! - Landmark: place of interest near a city
//! - Weather: hourly forecast data
//! - Rates: currency conversion rates

pub mod city;
pub mod landmark;
pub mod rates;
pub mod weather;

// Re-export all public types for convenient access
pub use city::City;
pub use landmark::Landmark;
pub use rates::RatesData;
pub use weather::{HourlyForecast, WeatherData};
