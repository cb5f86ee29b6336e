/// Mentor directory endpoints
///
/// # Endpoints
///
/// - `GET /api/mentors?q=` - Search the directory
/// - `POST /api/connect` - Send a connection request

use crate::{app::AppState, error::ApiResult};
use alumnet_shared::models::{
    mentor::Mentor,
    notification::Notification,
    user::PROFILE_USER_ID,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Directory search query parameters
#[derive(Debug, Deserialize)]
pub struct MentorSearchQuery {
    /// Free-text query; omitted means "match everything"
    pub q: Option<String>,
}

/// Directory search response
#[derive(Debug, Serialize)]
pub struct MentorsResponse {
    pub mentors: Vec<Mentor>,
}

/// Connection request body
#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    /// Display name of the mentor to contact; taken as free text, never
    /// checked against the directory
    #[serde(rename = "mentorName")]
    pub mentor_name: Option<String>,
}

/// Connection request response
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub ok: bool,

    /// Echo of the notification text
    pub message: String,
}

/// Search the mentor directory
///
/// Case-insensitive substring match against name, skills, and title; any
/// field hit qualifies. An empty or missing `q` returns every mentor.
///
/// # Endpoint
///
/// ```text
/// GET /api/mentors?q=ai
/// ```
///
/// # Response
///
/// ```json
/// { "mentors": [ { "id": 1, "full_name": "Rajesh Kumar", ... } ] }
/// ```
pub async fn search_mentors(
    State(state): State<AppState>,
    Query(params): Query<MentorSearchQuery>,
) -> ApiResult<Json<MentorsResponse>> {
    let q = params.q.unwrap_or_default();
    let mentors = Mentor::search(&state.db, &q).await?;
    Ok(Json(MentorsResponse { mentors }))
}

/// Send a connection request
///
/// Records the request as a notification for the profile user. The mentor
/// name is not validated; connecting to a name with no directory entry
/// still succeeds.
///
/// # Endpoint
///
/// ```text
/// POST /api/connect
/// Content-Type: application/json
///
/// { "mentorName": "Rajesh Kumar" }
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true, "message": "Connection request sent to Rajesh Kumar" }
/// ```
pub async fn connect_with_mentor(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> ApiResult<Json<ConnectResponse>> {
    let name = req.mentor_name.unwrap_or_default();
    let message = format!("Connection request sent to {}", name);

    Notification::create(&state.db, PROFILE_USER_ID, &message).await?;

    Ok(Json(ConnectResponse { ok: true, message }))
}
