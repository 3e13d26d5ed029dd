pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::card_store::CardStore;
use crate::services::watcher::CardDatabaseWatcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<CardStore>,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Decklist routes
        .route("/api/decklists/parse", post(routes::decklists::parse))
        .route("/api/decklists/validate", post(routes::decklists::validate_decklist))
        .route("/api/decklists/normalize", post(routes::decklists::normalize))
        .route("/api/decklists/edit", post(routes::decklists::edit_decklist))
        // Card database routes
        .route("/api/cards/reload", post(routes::cards::reload))
        .route("/api/cards/:name", get(routes::cards::lookup))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading card database from {}...", config.card_database_path.display());
    let cards = Arc::new(CardStore::load(&config.card_database_path)?);

    let mut watcher = CardDatabaseWatcher::new();
    if config.watch_card_database {
        watcher
            .start(cards.clone())
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let state = AppState { cards };

    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    watcher.stop();
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
