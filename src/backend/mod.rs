pub mod handlers;
mod routes;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::calculator::FinancialCalculator;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub calculator: FinancialCalculator,
}

/// Builds the full router. Split out of `run_server` so tests can drive it directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(|| async { "ok" }))
        .merge(routes::api_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(config: &Config, calculator: FinancialCalculator) -> anyhow::Result<()> {
    let app = app(AppState { calculator });

    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
