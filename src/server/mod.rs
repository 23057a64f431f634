pub mod handlers;
pub mod types;

use crate::{Result, config::Config, relay::PromptRelay};
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Router with the relay endpoint, a health probe and the HTTP middleware.
pub fn router(relay: Arc<PromptRelay>) -> Router {
    let app_state = handlers::AppState { relay };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/gemini", post(handlers::generate))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = Arc::new(PromptRelay::new(&config.llm));
    let app = router(relay);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
