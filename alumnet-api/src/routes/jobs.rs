/// Job board endpoints
///
/// # Endpoints
///
/// - `GET /api/jobs?q=` - Search the board
/// - `POST /api/jobs/:id/apply` - Apply to a listing

use crate::{app::AppState, error::ApiResult};
use alumnet_shared::models::{
    job::Job,
    notification::Notification,
    user::PROFILE_USER_ID,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Board search query parameters
#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    /// Free-text query; omitted means "match everything"
    pub q: Option<String>,
}

/// Board search response
#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

/// Application response
#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub ok: bool,
}

/// Search the job board
///
/// Case-insensitive substring match against title, company, and required
/// skills; any field hit qualifies. An empty or missing `q` returns every
/// listing.
///
/// # Endpoint
///
/// ```text
/// GET /api/jobs?q=google
/// ```
///
/// # Response
///
/// ```json
/// { "jobs": [ { "id": 1, "title": "Product Manager - AI Products", ... } ] }
/// ```
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchQuery>,
) -> ApiResult<Json<JobsResponse>> {
    let q = params.q.unwrap_or_default();
    let jobs = Job::search(&state.db, &q).await?;
    Ok(Json(JobsResponse { jobs }))
}

/// Apply to a job by id
///
/// The id is taken from the path as free-form text and never checked
/// against the board; applying to a nonexistent listing still succeeds.
/// The application is persisted only as its notification text.
///
/// # Endpoint
///
/// ```text
/// POST /api/jobs/7/apply
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true }
/// ```
pub async fn apply_to_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApplyResponse>> {
    let message = format!("Applied to job ID {}", id);

    Notification::create(&state.db, PROFILE_USER_ID, &message).await?;

    Ok(Json(ApplyResponse { ok: true }))
}
