//! Upstream API clients
//!
//! One module per third-party service. Each client issues a single outbound
//! request, interprets the upstream's status code and body, and maps the
//! outcome into a canonical model or a typed error. No retries anywhere: a
//! failed call surfaces directly to the caller.

pub mod exchange_rate;
pub mod foursquare;
pub mod nominatim;
pub mod open_meteo;
pub mod rest_countries;

pub use exchange_rate::ExchangeRateClient;
pub use foursquare::FoursquareClient;
pub use nominatim::{Coordinate, NominatimClient};
pub use open_meteo::OpenMeteoClient;
pub use rest_countries::RestCountriesClient;
