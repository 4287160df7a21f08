//! Reply orchestration
//!
//! One user turn in, one reply string out. The classifier picks the source;
//! the canned responders never fail, and a completion failure is folded into
//! a plain-text apology so the session keeps going.

use std::sync::Arc;

use crate::services::advice;
use crate::services::completion::CompletionBackend;
use crate::services::routing::{self, Route};
use crate::types::Message;

/// Persona and scope of the assistant; seeds every conversation history.
pub const SYSTEM_PROMPT: &str = "You are an expert assistant designed to help people with Smart Agriculture and IoT systems. \
    Your role is to provide guidance, troubleshooting, and information regarding smart agriculture technologies, including IoT sensors (temperature, humidity, soil moisture), devices (ESP32, Raspberry Pi), and network configuration. \
    You should provide practical advice to users of all experience levels, including farmers, engineers, and hobbyists. \
    Answers should be clear, concise, and offer practical solutions or tips. \
    Your tone should be friendly and professional.";

/// Shown instead of a reply when the completion endpoint is unreachable or
/// misconfigured. The session continues; the user can simply retry.
pub const APOLOGY_REPLY: &str = "Sorry, I couldn't reach the assistant service just now. Please try asking again in a moment.";

/// Produce the reply for one user turn. `history` is the session's ordered
/// message list including the system message and the latest user message.
/// Never fails: remote errors become [`APOLOGY_REPLY`].
pub async fn reply(
    history: &[Message],
    user_text: &str,
    backend: Option<&Arc<dyn CompletionBackend>>,
) -> String {
    match routing::classify(user_text) {
        Route::Recommendation => advice::recommendation(user_text).to_string(),
        Route::Troubleshooting => advice::troubleshooting(user_text).to_string(),
        Route::Completion => complete_remote(history, backend).await,
    }
}

async fn complete_remote(
    history: &[Message],
    backend: Option<&Arc<dyn CompletionBackend>>,
) -> String {
    let Some(backend) = backend else {
        tracing::warn!("no completion backend configured, sending apology reply");
        return APOLOGY_REPLY.to_string();
    };

    match backend.complete(history).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("completion request failed: {e}");
            APOLOGY_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::completion::CompletionError;
    use async_trait::async_trait;

    struct FixedBackend(&'static str);

    #[async_trait]
    impl CompletionBackend for FixedBackend {
        async fn complete(&self, _history: &[Message]) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(&self, _history: &[Message]) -> Result<String, CompletionError> {
            Err(CompletionError::RateLimited)
        }
    }

    fn history_for(user_text: &str) -> Vec<Message> {
        vec![Message::system(SYSTEM_PROMPT), Message::user(user_text)]
    }

    #[tokio::test]
    async fn wifi_issue_gets_the_canned_wifi_fix() {
        let text = "I have a wifi issue";
        let reply = reply(&history_for(text), text, None).await;
        assert_eq!(reply, advice::WIFI_FIX);
    }

    #[tokio::test]
    async fn tomato_recommendation_gets_the_canned_tomato_advice() {
        let text = "any recommendation for tomatoes?";
        let reply = reply(&history_for(text), text, None).await;
        assert_eq!(reply, advice::TOMATO_ADVICE);
    }

    #[tokio::test]
    async fn unmatched_text_is_answered_by_the_backend() {
        let backend: Arc<dyn CompletionBackend> =
            Arc::new(FixedBackend("Check your local forecast."));
        let text = "what's the weather doing";
        let reply = reply(&history_for(text), text, Some(&backend)).await;
        assert_eq!(reply, "Check your local forecast.");
    }

    #[tokio::test]
    async fn backend_failure_becomes_an_apology() {
        let backend: Arc<dyn CompletionBackend> = Arc::new(FailingBackend);
        let text = "tell me about drip irrigation";
        let reply = reply(&history_for(text), text, Some(&backend)).await;
        assert_eq!(reply, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn missing_backend_becomes_an_apology() {
        let text = "tell me about drip irrigation";
        let reply = reply(&history_for(text), text, None).await;
        assert_eq!(reply, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn canned_routes_never_touch_the_backend() {
        // A backend that would fail loudly if called.
        let backend: Arc<dyn CompletionBackend> = Arc::new(FailingBackend);
        let text = "recommend something for corn, it's dry";
        let reply = reply(&history_for(text), text, Some(&backend)).await;
        assert_eq!(reply, advice::CORN_DRY_ADVICE);
    }
}
