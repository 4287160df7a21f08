//! API endpoint handlers

use std::convert::Infallible;
use std::time::{Duration, Instant};

use axum::{
    extract::{Form, Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Html,
    },
};
use futures::stream::Stream;
use serde::Deserialize;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use crate::services::{chat, StreamingBuffer};
use crate::state::AppState;
use crate::types::{Message, StreamEvent};

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    session_id: String,
    message: String,
}

/// Handle chat message submission. Returns the user bubble and a pending
/// assistant bubble immediately; the reply itself arrives over the session's
/// persistent SSE connection.
pub async fn send_message(
    State(state): State<AppState>,
    Form(msg): Form<ChatMessage>,
) -> Html<String> {
    let message_id = Uuid::new_v4().to_string();
    tracing::info!("Received message for session {}", msg.session_id);

    let html = format!(
        r#"<div class="message user">
            <div class="message-bubble">{}</div>
        </div>
        <div class="message assistant" id="msg-{}">
            <div class="message-bubble"><span class="loading">Thinking...</span></div>
        </div>"#,
        html_escape::encode_text(&msg.message),
        message_id
    );

    tokio::spawn(process_message(
        state,
        msg.session_id,
        msg.message,
        message_id,
    ));

    Html(html)
}

/// One full turn: append the user message, pick a reply source, reveal the
/// reply word by word, append the assistant message.
async fn process_message(state: AppState, session_id: String, text: String, message_id: String) {
    let started = Instant::now();

    let (sender, history) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_or_create(&session_id);
        session.push(Message::user(text.clone()));
        (session.sender(), session.messages.clone())
    };

    // The reply is fully available before the reveal starts.
    let reply = chat::reply(&history, &text, state.completion.as_ref()).await;

    let mut buffer = StreamingBuffer::new(sender, message_id);
    buffer.reveal(&reply, state.config.reveal_delay()).await;
    buffer.complete().await;

    state.metrics.record_words(reply.split_whitespace().count());

    {
        let mut sessions = state.sessions.write().await;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.push(Message::assistant(reply));
        }
    }

    state
        .metrics
        .record_request(started.elapsed().as_millis() as u64);
}

/// Persistent SSE endpoint carrying the word-by-word reveal for a session.
pub async fn stream_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::info!("📡 SSE connection established for session: {}", session_id);

    let receiver = {
        let mut sessions = state.sessions.write().await;
        sessions.take_receiver(&session_id)
    };

    let stream = ReceiverStream::new(receiver).map(|event| {
        let sse_event = match event {
            StreamEvent::MessageContent {
                message_id,
                content,
            } => Event::default()
                .event("message")
                .data(format!("{}|{}", message_id, content)),
            StreamEvent::MessageComplete { message_id } => {
                Event::default().event("complete").data(message_id)
            }
            StreamEvent::MessageError { message_id, error } => Event::default()
                .event("message-error")
                .data(format!("{}|{}", message_id, error)),
        };
        Ok(sse_event)
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("keep-alive"),
    )
}
