use axum::{
    routing::post,
    Router,
};
use crate::backend::{handlers, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate_expenses", post(handlers::calculate_expenses))
        .route("/calculate_budget", post(handlers::calculate_budget))
        .route("/save_data", post(handlers::save_data))
        .route("/generate_report", post(handlers::generate_report))
}
