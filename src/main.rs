use std::net::SocketAddr;
use std::sync::Arc;

use aws_check::{AppState, AwsClients, Config, Result, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    config.validate().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!(
        "Region: {}, endpoint override: {}",
        config.region.as_deref().unwrap_or("<sdk default>"),
        config.endpoint_url.as_deref().unwrap_or("<none>")
    );

    // Clients are built once and shared by every request
    let clients = AwsClients::load(&config).await.map_err(|e| {
        tracing::error!("AWS configuration error: {}", e);
        e
    })?;

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let state = Arc::new(AppState {
        tables: Arc::new(clients.dynamodb),
        buckets: Arc::new(clients.s3),
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("AWS check starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /health    - Liveness probe");
    tracing::info!("  - GET /aws-check - List DynamoDB tables and S3 buckets");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, HTTP server shutting down"),
        Err(e) => {
            tracing::warn!("Cannot listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn setup_tracing() {
    // RUST_LOG wins; "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
