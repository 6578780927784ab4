use std::{env, net::SocketAddr, sync::Arc};

#[macro_use]
extern crate lazy_static;

use axum::{
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{
        env::Envy,
        util::{
            reqwest::build_client,
            shutdown::{self, Shutdown},
        },
    },
    images::apis::gemini::config::GeminiConfig,
};

mod app;
mod images;

// room for the data URL prefix, the JSON envelope and the scene description
const BODY_LIMIT_SLACK: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub gemini: Arc<GeminiConfig>,
    pub http_client: reqwest::Client,
    pub shutdown: Shutdown,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let gemini = match GeminiConfig::from_envy(&envy) {
        Ok(config) => config,
        Err(e) => panic!("invalid configuration: {}", e),
    };

    if gemini.api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, image processing requests will fail");
    }

    let http_client = match build_client(gemini.timeout) {
        Ok(client) => client,
        Err(e) => panic!("failed to build http client: {}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let (shutdown_trigger, shutdown) = shutdown::channel();

    tracing::info!(
        model = %gemini.model,
        api_version = %gemini.api_version,
        max_retries = gemini.retry_policy.max_retries,
        "configured image editing"
    );

    let state = AppState {
        envy: Arc::new(envy),
        gemini: Arc::new(gemini),
        http_client,
        shutdown,
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    let server = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(%e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }

            tracing::info!("shutting down");
            shutdown_trigger.trigger();
        });

    if let Err(e) = server.await {
        tracing::error!(%e);
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = state.gemini.max_image_bytes / 3 * 4 + BODY_LIMIT_SLACK;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/api/process-image", post(images::controller::process_image))
        .route("/api/models", get(images::controller::get_models))
        // layers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
