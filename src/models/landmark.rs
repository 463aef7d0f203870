//! Landmark model for places of interest

use serde::{Deserialize, Serialize};

/// A place of interest near a city.
///
/// The rating scale is whatever the upstream source provides (observed
/// 0-10); no normalization is applied.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Landmark {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
}
