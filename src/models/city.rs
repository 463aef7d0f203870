//! City model derived from the country directory

use serde::{Deserialize, Serialize};

/// A capital city with its country and currency metadata.
///
/// Derived, not persisted: the list is recomputed on every request, so `id`
/// is a 1-based enumeration position and is not stable across calls.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    pub id: u32,
    /// Capital city name
    pub name: String,
    /// ISO 3166-1 alpha-3 country code
    #[serde(rename = "threeLetterCode")]
    pub three_letter_code: String,
    /// One of the country's declared currency codes
    pub currency: String,
    /// Common country name
    pub country: String,
}
