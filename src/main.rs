//! Song Shelf - a REST service for a song library.
//!
//! Stores songs and their lyrics as numbered verses, and enriches newly
//! created songs with release date, lyrics, and link from an external
//! info service.

pub mod api;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
#[cfg(test)]
pub mod test_utils;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::enrichment::SongInfoClient;
use crate::service::LibraryService;
use crate::store::sqlite::{self, SqliteSongStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("song_shelf=info".parse().unwrap()))
        .init();

    let pool = sqlite::init_db(&sqlite::db_url(&config.db)).await?;
    tracing::info!(db = %config.db.display(), "database ready");

    let store = Arc::new(SqliteSongStore::new(pool));
    let info = Arc::new(SongInfoClient::new(config.api_url.clone()));
    let library = Arc::new(LibraryService::new(store, info));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, api::router(library))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
    }
}
