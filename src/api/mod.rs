//! Request handlers and routing for the public API
//!
//! Handlers validate required parameters, dispatch to the upstream clients
//! (or the aggregator for the composite endpoint), and translate adapter
//! errors into HTTP status codes. Only missing client input gets a 400;
//! every adapter failure is a 500 with the underlying error text.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::error;

use crate::TravelHubError;
use crate::aggregator;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/cities/{name}/{country}", get(get_city_bundle))
        .route("/landmarks", get(get_landmarks))
        .route("/weather", get(get_weather))
        .route("/rates/{currency}", get(get_rates))
}

/// Liveness probe; always 200
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().timestamp(),
    }))
}

#[derive(Debug, Deserialize)]
struct CityQuery {
    city: Option<String>,
    country: Option<String>,
}

async fn get_cities(State(state): State<Arc<AppState>>) -> Response {
    match state.rest_countries.list_cities().await {
        Ok(cities) => {
            let count = cities.len();
            (
                StatusCode::OK,
                Json(json!({ "cities": cities, "count": count })),
            )
                .into_response()
        }
        Err(err) => internal_error("Failed to fetch cities", &err),
    }
}

/// Composite endpoint: always 200, partial failures embedded in the body
async fn get_city_bundle(
    State(state): State<Arc<AppState>>,
    Path((name, country)): Path<(String, String)>,
) -> Response {
    let bundle = aggregator::fetch_city_bundle(state, name, country).await;
    (StatusCode::OK, Json(bundle)).into_response()
}

async fn get_landmarks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CityQuery>,
) -> Response {
    let Some(city) = query.city.filter(|city| !city.is_empty()) else {
        return validation_error("city parameter is required");
    };
    let country = query.country.unwrap_or_default();

    match state.foursquare.fetch_landmarks(&city, &country).await {
        Ok(landmarks) => {
            let count = landmarks.len();
            (
                StatusCode::OK,
                Json(json!({ "landmarks": landmarks, "count": count })),
            )
                .into_response()
        }
        Err(err) => internal_error("Failed to fetch landmarks", &err),
    }
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CityQuery>,
) -> Response {
    let Some(city) = query.city.filter(|city| !city.is_empty()) else {
        return validation_error("city parameter is required");
    };

    match state.open_meteo.fetch_weather(&city).await {
        Ok(weather) => (StatusCode::OK, Json(json!({ "weather": weather }))).into_response(),
        Err(err) => internal_error("Failed to fetch weather", &err),
    }
}

async fn get_rates(
    State(state): State<Arc<AppState>>,
    Path(currency): Path<String>,
) -> Response {
    if currency.is_empty() {
        return validation_error("currency parameter is required");
    }

    match state.exchange_rate.fetch_rates(&currency).await {
        Ok(rates) => (StatusCode::OK, Json(rates)).into_response(),
        Err(err) => internal_error("Failed to fetch rates", &err),
    }
}

fn validation_error(message: &str) -> Response {
    let err = TravelHubError::validation(message);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

fn internal_error(context: &str, err: &TravelHubError) -> Response {
    error!("{context}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": context, "message": err.to_string() })),
    )
        .into_response()
}
