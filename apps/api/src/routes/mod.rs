pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/test", get(handlers::handle_test))
        .route(
            "/api/process-candidate",
            post(handlers::handle_process_candidate),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
