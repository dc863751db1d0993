//! knox-albums - Album catalog HTTP service
//!
//! Opens one document-store connection, registers the album CRUD routes,
//! and listens on the configured port.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use knox_albums::config::{Cli, Config};
use knox_albums::store::MongoStore;
use knox_albums::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting knox-albums v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::resolve(Cli::parse());
    info!(
        "Document store: {} (database {}, collection {})",
        config.store_uri, config.database, config.collection
    );

    let store = match MongoStore::connect(&config).await {
        Ok(store) => {
            info!("Connected to local database.");
            store
        }
        Err(e) => {
            error!("Failed to open store connection: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(Arc::new(store));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("knox-albums listening on http://127.0.0.1:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
