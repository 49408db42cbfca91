use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod keygen;
mod models;
mod store;

use store::UrlStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: config::AppConfig,
    pub store: UrlStore,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Largest request body accepted; anything bigger is answered with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Assemble the full service: routes, CORS and request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    // Origins are mirrored rather than wildcarded: browsers reject `*` when
    // credentials are allowed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/shorten", post(handlers::shorten::shorten))
        // Short-key redirect — must come LAST so fixed paths take priority
        .route("/:key", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shortenit=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::AppConfig::from_env()?;
    tracing::info!("Base URL: {}", config.base_url);

    let bind_addr = format!("{}:{}", config.host, config.port);
    let store = UrlStore::with_capacity(config.store_capacity);
    tracing::info!("Store capacity: {} link(s)", store.capacity());
    let state = Arc::new(AppState { config, store });

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to start server on {}: {}", bind_addr, e);
            return Err(e).context(format!("failed to bind {bind_addr}"));
        }
    };
    tracing::info!("Server is running at http://{}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .await
        .context("server exited with an error")?;

    Ok(())
}
