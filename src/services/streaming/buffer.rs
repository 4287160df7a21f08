use std::time::Duration;
use tokio::sync::mpsc;

use crate::types::StreamEvent;

/// Paces a finished reply out over a session's event channel one word at a
/// time. Every push sends the accumulated text so far, so the client redraws
/// the whole bubble on each event. This is cosmetic: the full reply exists
/// before the reveal starts.
pub struct StreamingBuffer {
    sender: mpsc::Sender<StreamEvent>,
    revealed: String,
    message_id: String,
}

impl StreamingBuffer {
    pub fn new(sender: mpsc::Sender<StreamEvent>, message_id: String) -> Self {
        Self {
            sender,
            revealed: String::new(),
            message_id,
        }
    }

    /// Reveal `text` word by word with a fixed delay between increments.
    pub async fn reveal(&mut self, text: &str, delay: Duration) {
        for word in text.split_whitespace() {
            self.push_word(word).await;
            tokio::time::sleep(delay).await;
        }
    }

    async fn push_word(&mut self, word: &str) {
        if !self.revealed.is_empty() {
            self.revealed.push(' ');
        }
        self.revealed.push_str(word);

        self.send(StreamEvent::MessageContent {
            message_id: self.message_id.clone(),
            content: self.revealed.clone(),
        })
        .await;
    }

    pub async fn complete(&mut self) {
        tracing::debug!("reveal complete for message {}", self.message_id);
        self.send(StreamEvent::MessageComplete {
            message_id: self.message_id.clone(),
        })
        .await;
    }

    pub async fn error(&mut self, error: String) {
        self.send(StreamEvent::MessageError {
            message_id: self.message_id.clone(),
            error,
        })
        .await;
    }

    async fn send(&self, event: StreamEvent) {
        // A closed channel means the browser went away; the reveal is
        // cosmetic, so dropped events are not an error.
        let _ = self.sender.send(event).await;
    }
}
