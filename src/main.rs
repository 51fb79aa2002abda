//! Trainload - Cycling Training Load Metrics Server
//!
//! Main entry point: configure logging, resolve the data path, serve tools
//! over stdio.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trainload::config::Config;
use trainload::server::{self, ToolContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the protocol channel.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting trainload v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load();
    if let Some(path) = std::env::args().nth(1) {
        config.data_path = PathBuf::from(path);
    }
    tracing::info!(data_path = %config.data_path.display(), "using workout log");

    server::serve(ToolContext::new(config.data_path)).await
}
