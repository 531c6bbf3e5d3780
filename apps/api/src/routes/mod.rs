pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parse::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Axum caps request bodies at 2 MB out of the box; uploads follow
    // MAX_UPLOAD_BYTES instead and run uncapped when it is unset.
    let body_limit = match state.config.max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/parse", post(handlers::handle_parse))
        .layer(body_limit)
        .with_state(state)
}
