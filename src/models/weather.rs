//! Weather forecast models

use serde::{Deserialize, Serialize};

/// Hourly weather forecast for a resolved coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherData {
    pub latitude: f64,
    pub longitude: f64,
    /// Ordered by time ascending, inherited from upstream ordering
    pub hourly: Vec<HourlyForecast>,
}

/// A single hour of forecast data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourlyForecast {
    /// Upstream-provided timestamp string, passed through verbatim
    pub time: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Wind speed at 10m in km/h
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
    /// Relative humidity percentage
    #[serde(rename = "relativeHumidity")]
    pub relative_humidity: i32,
}
