use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Completion endpoint configuration
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub model: String,

    // Sampling parameters sent with every completion request
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,

    // Pacing of the word-by-word reveal
    pub reveal_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,

            groq_api_key: env::var("GROQ_API_KEY").ok(),
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| "llama3-70b-8192".to_string()),

            max_tokens: 200,
            temperature: 0.8,
            request_timeout_secs: 30,

            reveal_delay_ms: 50,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
