mod config;
mod db;
mod email;
mod errors;
mod models;
mod routes;
mod state;
mod storage;
mod submissions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::email::{EmailService, Notifier};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::pg::PgStorage;
use crate::storage::{Storage, StorageManager};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only a malformed PORT aborts startup.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Saanvi Yoga API v{}", env!("CARGO_PKG_VERSION"));

    // The durable backend connects lazily: nothing touches the network here.
    let durable: Option<Box<dyn Storage>> = match &config.database_url {
        Some(url) => Some(Box::new(PgStorage::new(url.clone()))),
        None => {
            warn!("DATABASE_URL not set; submissions will be held in memory only");
            None
        }
    };
    let storage = Arc::new(StorageManager::new(durable));

    let notifier: Arc<dyn Notifier> = Arc::new(EmailService::new(&config));
    info!("Email dispatcher initialized");

    // Build app state
    let state = AppState {
        storage,
        notifier,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
