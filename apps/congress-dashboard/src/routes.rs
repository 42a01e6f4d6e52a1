//! Router construction

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Page, health check and one JSON endpoint per display region
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health))
        // Selection control
        .route("/api/legislators", get(handlers::list_legislators))
        // Display regions
        .route("/api/legislators/:id/biography", get(handlers::biography))
        .route("/api/legislators/:id/portrait", get(handlers::portrait))
        .route("/api/legislators/:id/votes", get(handlers::votes))
        .route("/api/legislators/:id/bills", get(handlers::bills))
        .route("/api/legislators/:id/keywords", get(handlers::keywords))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
