/// Notification model
///
/// Notifications are append-only: profile updates, mentor-connection
/// requests, and job applications each insert one row. Nothing ever updates
/// or deletes them through the API, so `is_read` stays 0 for every row
/// created here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A message surfaced to the profile user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: i64,

    /// Recipient user id (always the profile user in practice)
    pub user_id: i64,

    /// Message text
    pub message: Option<String>,

    /// Read flag, stored as 0 or 1; never set to 1 by any endpoint
    pub is_read: i64,

    /// Insertion timestamp (store default)
    pub created_at: NaiveDateTime,
}

impl Notification {
    /// Appends a notification for the given user
    ///
    /// `is_read` and `created_at` take their store defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        message: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO notifications (user_id, message) VALUES (?, ?)")
            .bind(user_id)
            .bind(message)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Lists all notifications for a user, newest first
    ///
    /// `created_at` has second resolution, so the id is used as a
    /// tie-break to keep the newest-first ordering deterministic when
    /// several rows land in the same second.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, user_id, message, is_read, created_at
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
