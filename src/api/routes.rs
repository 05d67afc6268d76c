//! Router assembly and shared application state.
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::gemini::generator::MediaGenerator;

pub struct AppState {
    pub generator: MediaGenerator,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/ping", get(handlers::ping))
        .route("/api/marketing", post(handlers::generate_marketing_assets))
        .route("/api/real-estate", post(handlers::generate_real_estate_tour))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
