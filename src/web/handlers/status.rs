//! Health and status endpoints

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "iot-partner",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    server: String,
    completion_backend: String,
    model: String,
    sessions: usize,
    requests_processed: usize,
    words_revealed: usize,
    avg_latency_ms: u64,
    uptime_seconds: u64,
}

pub async fn system_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let stats = state.metrics.get_stats();
    let sessions = state.sessions.read().await.count();

    Json(SystemStatus {
        server: "Running".to_string(),
        completion_backend: if state.completion.is_some() {
            "Active"
        } else {
            "Canned replies only"
        }
        .to_string(),
        model: state.config.model.clone(),
        sessions,
        requests_processed: stats.requests_processed,
        words_revealed: stats.words_revealed,
        avg_latency_ms: stats.avg_latency_ms,
        uptime_seconds: stats.uptime_seconds,
    })
}
