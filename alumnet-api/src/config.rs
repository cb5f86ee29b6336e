/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct. Every variable has a default, so the
/// server starts with no environment at all.
///
/// # Environment Variables
///
/// - `PORT`: Port to bind to (default: 4000)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `DATABASE_PATH`: SQLite file path, relative to the working directory
///   (default: alumnet.db)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 1)
/// - `STATIC_DIR`: Directory holding the front-end bundle (default: public)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use alumnet_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Static asset configuration
    pub assets: AssetsConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; a `*` entry enables permissive CORS
    pub cors_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file path
    pub path: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

/// Static asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the bundled front-end
    pub dir: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but fails to parse
    /// (e.g. a non-numeric `PORT`).
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse::<u16>()?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "alumnet.db".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
            },
            database: DatabaseConfig {
                path: database_path,
                max_connections,
            },
            assets: AssetsConfig { dir: static_dir },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
