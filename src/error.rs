//! Error types and handling for the `TravelHub` backend

use thiserror::Error;

/// Main error type for the `TravelHub` backend
#[derive(Error, Debug)]
pub enum TravelHubError {
    /// Missing or malformed client input
    #[error("{message}")]
    Validation { message: String },

    /// Network-level failure reaching an upstream service
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream responded with a non-success status; carries the raw body
    /// for diagnostics
    #[error("{service} API error: {status} - {body}")]
    UpstreamStatus {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Geocoding yielded zero results
    #[error("location not found: {query}")]
    NotFound { query: String },

    /// Upstream body did not match the expected shape
    #[error("failed to decode {service} response: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },

    /// Missing or unusable configuration (API credentials)
    #[error("{message}")]
    Config { message: String },

    /// Coordinate resolution failed before the main upstream call
    #[error("geocoding failed: {source}")]
    Geocode {
        #[source]
        source: Box<TravelHubError>,
    },
}

impl TravelHubError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error for an upstream service
    pub fn transport(service: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { service, source }
    }

    /// Create a new upstream status error
    pub fn upstream_status(service: &'static str, status: u16, body: String) -> Self {
        Self::UpstreamStatus {
            service,
            status,
            body,
        }
    }

    /// Create a new decode error for an upstream response
    pub fn decode<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Decode {
            service,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap a geocoding failure so callers can tell which phase failed
    #[must_use]
    pub fn geocoding(source: TravelHubError) -> Self {
        Self::Geocode {
            source: Box::new(source),
        }
    }
}
