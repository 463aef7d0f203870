use anyhow::Result;
use axum::{Router, http::Method, http::header, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::state::AppState;

/// Assemble the full application router with CORS applied
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(api::health))
        .nest("/api/v1", api::router())
        .layer(cors)
        .with_state(state)
}

pub async fn run(state: Arc<AppState>, port: u16) -> Result<()> {
    let app = app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on port {}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
