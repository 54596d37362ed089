use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use catalog_core::error::CoreError;
use catalog_core::seed;
use catalog_db::store::PgCatalogStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::AppConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "catalog_api=debug,catalog_db=info,sqlx=warn,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!("Server failed to start: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    let config = AppConfig::from_env()?;
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        db_host = %config.database.host,
        strict_tls = config.database.strict_transport_verification,
        "Loaded configuration"
    );
    if !config.database.strict_transport_verification {
        tracing::warn!("Database TLS certificate verification is disabled");
    }

    let seeds = match &config.sector_seed_path {
        Some(path) => seed::load_sectors(path)?,
        None => seed::default_sectors(),
    };

    // --- Database ---
    let pool = catalog_db::create_pool(&config.database)
        .await
        .map_err(|e| CoreError::Connectivity(e.to_string()))?;
    tracing::info!("Database connection pool created");

    let store = PgCatalogStore::new(pool);
    let seeded = store
        .initialize(&seeds)
        .await
        .context("Database initialization failed")?;
    if seeded > 0 {
        tracing::info!(seeded, "Sectors seeded");
    }
    tracing::info!("Database initialized");

    // --- App state ---
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.server.clone()),
    };
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid HOST address: {}", config.server.host))?,
        config.server.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
