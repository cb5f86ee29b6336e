/// Profile endpoints
///
/// The profile is the single user row with id 1. Reading it never fails on
/// absence: an unseeded store yields `{"user": null}` with status 200.
/// Updating overwrites all six fields unconditionally — fields missing from
/// the request body are written as NULL, erasing previous values — and
/// always appends a "Profile updated successfully." notification, whether
/// or not anything actually changed.
///
/// # Endpoints
///
/// - `GET /api/user` - Read the profile
/// - `POST /api/user` - Overwrite the profile

use crate::{app::AppState, error::ApiResult};
use alumnet_shared::models::{
    notification::Notification,
    user::{ProfileUpdate, User, PROFILE_USER_ID},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile update request
///
/// The mentorship flag is accepted as any JSON value and coerced to 0/1 by
/// truthiness, matching what loosely-typed clients send (true, 1, "yes" all
/// set the flag; false, 0, "", null, or omission clear it).
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name
    pub full_name: Option<String>,

    /// Current job title
    pub current_role: Option<String>,

    /// Current employer
    pub company: Option<String>,

    /// Comma-separated skill list
    pub skills: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    /// Boolean-like mentorship availability flag
    #[serde(default)]
    pub available_for_mentorship: Value,
}

/// Profile read response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The profile row, or null if it does not exist
    pub user: Option<User>,
}

/// Profile update response
#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub ok: bool,

    /// The profile row after the overwrite
    pub user: Option<User>,
}

/// Read the profile
///
/// # Endpoint
///
/// ```text
/// GET /api/user
/// ```
///
/// # Response
///
/// ```json
/// { "user": { "id": 1, "full_name": "Priya Sharma", ... } }
/// ```
///
/// A store where seeding never ran answers `{ "user": null }`, not an error.
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Json<ProfileResponse>> {
    let user = User::find_profile(&state.db).await?;
    Ok(Json(ProfileResponse { user }))
}

/// Overwrite the profile
///
/// # Endpoint
///
/// ```text
/// POST /api/user
/// Content-Type: application/json
///
/// {
///   "full_name": "Priya Sharma",
///   "current_role": "Senior Software Engineer",
///   "company": "TCS",
///   "skills": "Rust, React",
///   "bio": "...",
///   "available_for_mentorship": true
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true, "user": { ...updated row... } }
/// ```
pub async fn update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let update = ProfileUpdate {
        full_name: req.full_name,
        current_role: req.current_role,
        company: req.company,
        skills: req.skills,
        bio: req.bio,
        available_for_mentorship: if is_truthy(&req.available_for_mentorship) {
            1
        } else {
            0
        },
    };

    let user = User::overwrite_profile(&state.db, update).await?;

    // Appended regardless of whether the overwrite changed anything.
    Notification::create(&state.db, PROFILE_USER_ID, "Profile updated successfully.").await?;

    Ok(Json(UpdateProfileResponse { ok: true, user }))
}

/// JS-style truthiness for the boolean-like mentorship flag
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_coercion() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_missing_flag_defaults_to_null() {
        let req: UpdateProfileRequest = serde_json::from_value(json!({
            "full_name": "Priya Sharma"
        }))
        .unwrap();

        assert!(req.available_for_mentorship.is_null());
        assert!(!is_truthy(&req.available_for_mentorship));
    }
}
