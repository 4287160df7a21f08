use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::completion::{CompletionBackend, GroqClient};
use crate::services::template::TemplateEngine;
use crate::services::{MetricsService, SessionManager};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    // None when no credential is configured - the server still runs and
    // remote-routed turns get the apology reply.
    pub completion: Option<Arc<dyn CompletionBackend>>,
    pub sessions: Arc<RwLock<SessionManager>>,
    pub templates: Arc<TemplateEngine>,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let config = Config::from_env()?;
        tracing::info!("[STATE] Config loaded:");
        tracing::info!("[STATE]   Endpoint: {}", config.groq_base_url);
        tracing::info!("[STATE]   Model: {}", config.model);

        let completion: Option<Arc<dyn CompletionBackend>> = match &config.groq_api_key {
            Some(key) => match GroqClient::new(key.clone(), &config) {
                Ok(client) => {
                    tracing::info!("[STATE] ✅ Completion client ready");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::error!("[STATE] ⚠️ Completion client setup failed: {}", e);
                    tracing::info!("[STATE] Server will start with canned replies only");
                    None
                }
            },
            None => {
                tracing::warn!("[STATE] GROQ_API_KEY not set");
                tracing::info!("[STATE] Server will start with canned replies only");
                None
            }
        };

        let templates = TemplateEngine::new()?;

        Ok(Self {
            config: Arc::new(config),
            completion,
            sessions: Arc::new(RwLock::new(SessionManager::new())),
            templates: Arc::new(templates),
            metrics: Arc::new(MetricsService::new()),
        })
    }
}
