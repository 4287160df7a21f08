use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = (state.config.host.clone(), state.config.port);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(crate::web::routes::create_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(crate::web::middleware::cors_layer())
}
