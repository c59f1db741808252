//! HTTP surface for the mock post pipeline.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use tower_http::cors::CorsLayer;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/pipeline", post(routes::run_pipeline))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
