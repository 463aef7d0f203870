//! Currency conversion rate models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Conversion rates for a base currency at a point in time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RatesData {
    #[serde(rename = "baseCurrency")]
    pub base_currency: String,
    /// Currency code to conversion rate
    pub rates: HashMap<String, f64>,
    /// When the upstream last updated these rates
    pub timestamp: DateTime<Utc>,
}
