pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::entities::handlers as entity_handlers;
use crate::extraction::handlers as extraction_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/extract", post(extraction_handlers::handle_extract))
        .route("/noop", post(extraction_handlers::handle_noop))
        .route(
            "/extract_entities",
            post(entity_handlers::handle_extract_entities),
        )
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}
