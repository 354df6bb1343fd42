mod apidoc;
mod config;
mod handlers;
mod models;
mod prompt;
mod routes;
mod services;
mod suggestions;
mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use config::Config;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub http: reqwest::Client,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing GEMINI_API_KEY is fatal here, never per-request
    let cfg = Config::from_env().expect("Failed to load configuration");
    let http = reqwest::Client::new();
    let addr = format!("{}:{}", cfg.app_host, cfg.app_port);

    let state = AppState { cfg, http };
    let app = router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Intelli AI Server listening on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::liveness))
        .route("/intelli-ai", post(routes::chat::intelli_ai))
        .route("/smart-reply", post(routes::suggest::smart_reply))
        .route("/ask-ai", post(routes::assistant::ask_ai))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", apidoc::ApiDoc::openapi()))
        // The app frontend calls from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
