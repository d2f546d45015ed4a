pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        .route(
            "/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .route("/evaluate-answer", post(handlers::handle_evaluate_answer))
        .with_state(state)
}

/// The router with request tracing and CORS applied, as served by `main`.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive()) // TODO: restrict origins before production
}
