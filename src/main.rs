use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use travelhub::config::AppConfig;
use travelhub::state::AppState;
use travelhub::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    let state = Arc::new(AppState::from_config(&config)?);

    web::run(state, config.port).await
}
