/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory store setup (schema + optional demo data)
/// - Router construction
/// - Request builders and response decoding helpers

use alumnet_api::app::{build_router, AppState};
use alumnet_api::config::{ApiConfig, AssetsConfig, Config, DatabaseConfig};
use alumnet_shared::db::schema::init_schema;
use alumnet_shared::db::seed::seed_demo_data;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test context containing the store and the assembled router
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a context over a fresh in-memory store with demo data
    pub async fn new() -> anyhow::Result<Self> {
        Self::build(true).await
    }

    /// Creates a context whose store has tables but no rows, simulating a
    /// startup where seeding failed
    pub async fn unseeded() -> anyhow::Result<Self> {
        Self::build(false).await
    }

    async fn build(seed: bool) -> anyhow::Result<Self> {
        // One connection only: each sqlite::memory: connection is its own
        // database, so a larger pool would scatter the tables.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        init_schema(&db).await?;
        if seed {
            seed_demo_data(&db).await?;
        }

        let state = AppState::new(db.clone(), test_config());
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Configuration for tests
///
/// Integration tests run with the package directory as working directory,
/// hence the `../public` assets path.
fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            path: ":memory:".to_string(),
            max_connections: 1,
        },
        assets: AssetsConfig {
            dir: "../public".to_string(),
        },
    }
}

/// Builds a GET request
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Builds a POST request with a JSON body
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Decodes a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Decodes a response body as text
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}
