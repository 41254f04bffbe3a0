//! Ratecast server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratecast_engine::RateEngineBuilder;
use ratecast_ext_pensford::{PensfordDecoder, PensfordSource};
use ratecast_ext_redb::RedbCurveStore;
use ratecast_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,ratecast=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Ratecast Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/ratecast.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Snapshot store, constructed once and injected into the engine
    let store = RedbCurveStore::open(&server_config.storage_path)?;

    // Build engine
    let engine = RateEngineBuilder::new()
        .with_source(Arc::new(PensfordSource::new(&server_config.curve_url)))
        .with_decoder(Arc::new(PensfordDecoder))
        .with_store(Arc::new(store))
        .build()?;

    // Start server
    let server = Server::new(server_config, Arc::new(engine));
    server.start().await?;

    Ok(())
}
