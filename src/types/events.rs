use serde::{Deserialize, Serialize};

/// Events carried over a session's SSE channel while a reply is revealed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StreamEvent {
    /// Accumulated partial text of the reply so far. Each event redraws the
    /// whole bubble rather than appending a delta.
    MessageContent { message_id: String, content: String },
    MessageComplete { message_id: String },
    MessageError { message_id: String, error: String },
}
