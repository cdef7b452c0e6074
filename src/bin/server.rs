//! `safescan-server`: serves the landing page and the `/analyze` endpoint.

use clap::Parser;
use safescan::ServiceConfig;
use safescan_search::Analyzer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Rate the pages behind a web search by sensitive-keyword density.
#[derive(Parser)]
#[command(name = "safescan-server", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("safescan=info,safescan_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ServiceConfig::from_file(path)?,
        None => {
            let default_path = ServiceConfig::default_config_path();
            if default_path.exists() {
                ServiceConfig::from_file(&default_path)?
            } else {
                ServiceConfig::default()
            }
        }
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let analyzer = Analyzer::new(config.analyzer.clone(), config.keyword_table())?;
    tracing::info!("safescan v{} starting", env!("CARGO_PKG_VERSION"));

    safescan::serve(Arc::new(analyzer), &config.server, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
        }
        tracing::info!("shutting down");
    })
    .await?;
    Ok(())
}
