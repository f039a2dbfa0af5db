mod comparison;
mod config;
mod error;
mod export;
mod handlers;
mod models;
mod regions;
mod stats;
mod store;

use anyhow::{Context, Result};
use config::Config;
use store::ListingStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub store: ListingStore,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // The store is built once here and only read afterwards
    match config.listing_seed {
        Some(seed) => tracing::info!("Generating {} listings (seed {})", config.listing_count, seed),
        None => tracing::info!("Generating {} listings (random seed)", config.listing_count),
    }
    let store = ListingStore::generate(config.listing_count, config.listing_seed);

    let state = Arc::new(AppState { store });

    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
