/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use alumnet_api::{app::AppState, config::Config};
/// use alumnet_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// let state = AppState::new(pool, config);
/// let app = alumnet_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /api/
/// │   ├── GET  /ping                # liveness probe
/// │   ├── GET  /user                # read the profile
/// │   ├── POST /user                # overwrite the profile
/// │   ├── GET  /mentors?q=          # mentor directory search
/// │   ├── POST /connect             # mentor connection request
/// │   ├── GET  /jobs?q=             # job board search
/// │   ├── POST /jobs/:id/apply      # apply to a job
/// │   └── GET  /notifications       # newest-first notification feed
/// └── /* (fallback)                 # static front-end, index.html for
///                                   # unmatched paths (client-side routing)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let api_routes = Router::new()
        .route("/ping", get(routes::health::ping))
        .route(
            "/user",
            get(routes::profile::get_profile).post(routes::profile::update_profile),
        )
        .route("/mentors", get(routes::mentors::search_mentors))
        .route("/connect", post(routes::mentors::connect_with_mentor))
        .route("/jobs", get(routes::jobs::search_jobs))
        .route("/jobs/:id/apply", post(routes::jobs::apply_to_job))
        .route(
            "/notifications",
            get(routes::notifications::list_notifications),
        );

    // Static front-end: serve the bundle directory, and hand every
    // unmatched path the entry document so client-side routing works.
    let index = Path::new(&state.config.assets.dir).join("index.html");
    let static_service =
        ServeDir::new(&state.config.assets.dir).not_found_service(ServeFile::new(index));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_service)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
