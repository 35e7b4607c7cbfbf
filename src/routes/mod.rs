/// Application routes configuration
use crate::handlers::{
    calculate_crater, calculate_impact, calculate_mitigation, calculate_trajectory,
    get_sample_asteroids, health, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health))
        // Calculators
        .route("/api/calculate/trajectory", post(calculate_trajectory))
        .route("/api/calculate/impact", post(calculate_impact))
        .route("/api/calculate/crater", post(calculate_crater))
        .route("/api/calculate/mitigation", post(calculate_mitigation))
        // Preset scenarios
        .route("/api/asteroids/samples", get(get_sample_asteroids))
        // Browser clients call from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
