pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::Config,
    llm::OpenAiClient,
    quiz::QuizGenerator,
};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn build_router(state: handlers::AppState, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| Error::config(format!("Invalid allowed origin '{}': {}", allowed_origin, e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/", get(handlers::status))
        .route("/generate-quiz", post(handlers::generate_quiz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn run(config: Config) -> Result<()> {
    // Model client is built once and shared across requests
    let generator = QuizGenerator::new(Box::new(OpenAiClient::new(config.llm.clone())));

    let app_state = handlers::AppState {
        generator: Arc::new(generator),
    };

    let app = build_router(app_state, &config.server.allowed_origin)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
