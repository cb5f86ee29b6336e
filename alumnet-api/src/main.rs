//! # Alumnet API Server
//!
//! Single-process backend for the alumni network front-end: profile,
//! mentorship directory, job board, and notifications over a small JSON
//! API, with the bundled front-end served for everything else.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p alumnet-api
//! ```

use alumnet_api::{
    app::{build_router, AppState},
    config::Config,
};
use alumnet_shared::db::{pool, schema, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alumnet_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Alumnet API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    // Open the store and make sure the schema exists
    let db = pool::create_pool(pool::DatabaseConfig {
        path: config.database.path.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    schema::init_schema(&db).await?;

    // Fire-and-forget: a failed seed is logged but never blocks startup
    if let Err(err) = seed::seed_demo_data(&db).await {
        tracing::warn!("Demo-data seeding failed: {}", err);
    }

    let state = AppState::new(db.clone(), config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Backend running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", err);
    }
    tracing::info!("Shutdown signal received");
}
