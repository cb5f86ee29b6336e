/// Database connection pool management
///
/// This module provides the SQLite connection pool used by the whole server.
/// The store is a single on-disk file, created on first startup if missing.
///
/// The pool is deliberately capped at one connection: every request shares
/// the same underlying handle and SQLite serializes writes internally, so
/// there is no cross-connection coordination to reason about.
///
/// # Example
///
/// ```no_run
/// use alumnet_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         path: "alumnet.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///
///     let row: (i64,) = sqlx::query_as("SELECT ?")
///         .bind(42i64)
///         .fetch_one(&pool)
///         .await?;
///
///     Ok(())
/// }
/// ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the database connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file, relative to the working directory
    pub path: String,

    /// Maximum number of connections in the pool
    ///
    /// Default: 1. The server runs every request over one shared connection;
    /// raising this would change the write-ordering behavior of the store.
    pub max_connections: u32,

    /// Whether to create the database file if it does not exist
    pub create_if_missing: bool,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "alumnet.db".to_string(),
            max_connections: 1,
            create_if_missing: true,
            acquire_timeout_seconds: 30,
        }
    }
}

/// Creates and initializes the SQLite connection pool
///
/// This function:
/// 1. Opens (or creates) the database file
/// 2. Performs a health check to verify the store is usable
/// 3. Returns an error if the file cannot be opened
///
/// # Errors
///
/// Returns an error if:
/// - The database file cannot be created or opened
/// - The health check fails
///
/// # Example
///
/// ```no_run
/// use alumnet_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_pool(config: DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        path = %config.path,
        max_connections = config.max_connections,
        "Opening SQLite database"
    );

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(config.create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect_with(options)
        .await?;

    // Perform health check
    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Performs a health check on the database connection
///
/// Executes a simple query to verify the store is reachable and responding.
///
/// # Errors
///
/// Returns an error if the health check query fails
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Database health check passed");
        Ok(())
    } else {
        warn!("Database health check returned unexpected value: {}", result.0);
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Gracefully closes the connection pool
///
/// Called during shutdown so the database file is released cleanly.
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing database connection pool");
    pool.close().await;
}
