//! Remote chat-completion client
//!
//! Sends the full conversation history to a hosted, OpenAI-compatible
//! chat-completions endpoint (Groq) and returns the first choice's text.
//! The client sits behind [`CompletionBackend`] so the session loop can be
//! tested against a mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::types::Message;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("missing or rejected api credential")]
    Auth,
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rate limited by completion endpoint")]
    RateLimited,
    #[error("provider: {0}")]
    Provider(String),
    #[error("empty or malformed completion response")]
    InvalidResponse,
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produce a reply to the given conversation. `history` is the ordered
    /// message list, system message first.
    async fn complete(&self, history: &[Message]) -> Result<String, CompletionError>;
}

pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl GroqClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.groq_base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, history: &[Message]) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: history,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), detail));
        }

        let body = response.text().await?;
        extract_text(&body)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn error_for_status(status: u16, detail: String) -> CompletionError {
    match status {
        401 | 403 => CompletionError::Auth,
        429 => CompletionError::RateLimited,
        _ => CompletionError::Provider(format!("status {status}: {detail}")),
    }
}

/// Pull the first choice's text out of a completion response body.
fn extract_text(body: &str) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|_| CompletionError::InvalidResponse)?;

    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    if text.is_empty() {
        return Err(CompletionError::InvalidResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_and_rate_limit_statuses_get_their_own_kind() {
        assert!(matches!(error_for_status(401, String::new()), CompletionError::Auth));
        assert!(matches!(error_for_status(403, String::new()), CompletionError::Auth));
        assert!(matches!(
            error_for_status(429, String::new()),
            CompletionError::RateLimited
        ));
        assert!(matches!(
            error_for_status(500, "boom".into()),
            CompletionError::Provider(_)
        ));
    }

    #[test]
    fn extracts_first_choice_text() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Check your local forecast."}},
                {"message": {"role": "assistant", "content": "second choice"}}
            ]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "Check your local forecast.");
    }

    #[test]
    fn empty_choices_are_invalid() {
        assert!(matches!(
            extract_text(r#"{"choices": []}"#),
            Err(CompletionError::InvalidResponse)
        ));
    }

    #[test]
    fn missing_content_is_invalid() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(matches!(extract_text(body), Err(CompletionError::InvalidResponse)));
    }

    #[test]
    fn garbage_body_is_invalid() {
        assert!(matches!(
            extract_text("not json"),
            Err(CompletionError::InvalidResponse)
        ));
    }
}
