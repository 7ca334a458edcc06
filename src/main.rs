use clap::Parser;
use dharmatech_search::catalog::loader::{CatalogSource, load_catalog};
use dharmatech_search::config;
use dharmatech_search::create_router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dharmatech-search", about = "Monastery search and recommendation service")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "DHARMATECH_BIND", default_value = config::DEFAULT_BIND)]
    bind: SocketAddr,

    /// Catalog JSON file (defaults to the embedded seed dataset)
    #[arg(long, env = "DHARMATECH_CATALOG", conflicts_with = "catalog_url")]
    catalog: Option<PathBuf>,

    /// Remote catalog JSON URL
    #[arg(long, env = "DHARMATECH_CATALOG_URL")]
    catalog_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let source = CatalogSource::from_args(args.catalog, args.catalog_url);
    tracing::info!("Loading catalog from {:?}", source);

    let catalog = match load_catalog(&source).await {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Failed to load catalog: {:#}", e);
            return Err(e);
        }
    };
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, every search will return nothing");
    }

    let app = create_router(catalog);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("HTTP server listening on {}", args.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
