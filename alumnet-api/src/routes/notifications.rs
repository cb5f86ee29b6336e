/// Notification feed endpoint
///
/// # Endpoint
///
/// - `GET /api/notifications` - List all notifications, newest first

use crate::{app::AppState, error::ApiResult};
use alumnet_shared::models::{notification::Notification, user::PROFILE_USER_ID};
use axum::{extract::State, Json};
use serde::Serialize;

/// Notification feed response
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// List the profile user's notifications, newest first
///
/// There is no read/unread mutation endpoint; every row keeps `is_read: 0`.
///
/// # Endpoint
///
/// ```text
/// GET /api/notifications
/// ```
///
/// # Response
///
/// ```json
/// {
///   "notifications": [
///     { "id": 3, "user_id": 1, "message": "Applied to job ID 2", "is_read": 0, ... }
///   ]
/// }
/// ```
pub async fn list_notifications(
    State(state): State<AppState>,
) -> ApiResult<Json<NotificationsResponse>> {
    let notifications = Notification::list_for_user(&state.db, PROFILE_USER_ID).await?;
    Ok(Json(NotificationsResponse { notifications }))
}
