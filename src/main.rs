use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iot_partner::{state::AppState, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iot_partner=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting IoT-Partner");

    // Create application state (config, sessions, completion backend)
    let app_state = AppState::new().await?;

    // Start web server
    web::start_server(app_state).await?;

    Ok(())
}
