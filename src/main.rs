use crate::config::CampConfig;
use crate::database::CampRepository;
use crate::database::sqlite::SqliteRepository;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub mod config;
mod database;
mod db;
mod domain;
mod features;

#[cfg(test)]
mod tests;

/// Everything a handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CampRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CampRepository>) -> Self {
        Self { repo }
    }
}

// the full application: feature routers, request tracing and shared state
pub fn build_app(state: AppState) -> Router {
    features::app_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("camp_signups=info,tower_http=info")),
        )
        .init();

    // load centralized config
    let config = CampConfig::from_env();

    let pool = db::connect(&config)
        .await
        .context("Failed to prepare the database")?;

    let app_state = AppState::new(Arc::new(SqliteRepository::new(pool)));
    let app = build_app(app_state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
