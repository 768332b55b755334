use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use items_api::rest::{AppState, create_router, normalize_prefix};
use items_api::seed::load_store;
use items_api::{ItemOperations, ItemStore, create_audit_logger};

#[derive(Parser)]
#[command(name = "items-api")]
#[command(about = "Items API Server - in-memory item CRUD over REST")]
struct Args {
    /// Listen address for REST API
    #[arg(short, long, env = "ITEMS_API_LISTEN", default_value = "[::]:3001")]
    listen: String,

    /// Route prefix for item endpoints (e.g. /v1)
    #[arg(long, env = "ITEMS_API_PREFIX", default_value = "")]
    prefix: String,

    /// JSON file with initial items ([{"id": ..., "name": ...}])
    #[arg(long, env = "ITEMS_API_SEED")]
    seed: Option<PathBuf>,

    /// Disable audit log events
    #[arg(long)]
    no_audit: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("items_api=info".parse()?)
                .add_directive("audit=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("Startup failed: {}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let prefix = normalize_prefix(&args.prefix);

    let store = Arc::new(load_store(args.seed.as_deref()).await?);
    info!(
        "Starting items-api - REST: {}, prefix: {:?}, seeded items: {}",
        args.listen,
        prefix,
        store.count().await?
    );

    let app_state = Arc::new(AppState {
        items: ItemOperations::new(store),
        audit: create_audit_logger(!args.no_audit),
    });

    let router = create_router(app_state, &prefix);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!("REST API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
