use axum::{extract::State, response::Html};
use uuid::Uuid;

use crate::state::AppState;

/// Serve the chat page. Every page load mints a fresh session whose history
/// starts with the system message.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session_id = Uuid::now_v7().to_string();

    state.sessions.write().await.create_session(&session_id);
    tracing::debug!("created session {session_id}");

    let html = state
        .templates
        .render_chat_page(&session_id)
        .unwrap_or_else(|e| {
            tracing::error!("failed to render chat page: {e}");
            format!(
                r#"<!DOCTYPE html>
                <html>
                <head><title>Error</title></head>
                <body>
                    <h1>Error loading chat page</h1>
                    <p>{}</p>
                </body>
                </html>"#,
                html_escape::encode_text(&e.to_string())
            )
        });

    Html(html)
}

pub async fn chat_page(State(state): State<AppState>) -> Html<String> {
    index(State(state)).await
}
