/// Liveness probe
///
/// # Endpoint
///
/// ```text
/// GET /api/ping
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true }
/// ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Ping response
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    /// Always true when the server is up
    pub ok: bool,
}

/// Ping handler
///
/// Answers as long as the process is running; the datastore is not touched.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { ok: true })
}
