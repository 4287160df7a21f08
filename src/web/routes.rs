use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(super::handlers::chat::index))
        .route("/chat", get(super::handlers::chat::chat_page))
        // API endpoints
        .route("/api/chat", post(super::handlers::api::send_message))
        .route("/api/stream/{session_id}", get(super::handlers::api::stream_session))
        .route("/api/status", get(super::handlers::status::system_status))
        // Health check
        .route("/health", get(super::handlers::status::health_check))
        .with_state(state)
}
