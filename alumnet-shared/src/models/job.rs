/// Job model and board search
///
/// Listings are created by the seeder only; the API surface is read-only.
/// Applying to a job leaves no trace in this table — only a notification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Job-board listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: i64,

    /// Position title
    pub title: Option<String>,

    /// Hiring company
    pub company: Option<String>,

    /// Office location
    pub location: Option<String>,

    /// Free-text range, e.g. "25-35 LPA"
    pub salary_range: Option<String>,

    /// Employment category, e.g. "Full-time"
    ///
    /// `type` is a Rust keyword, so the column is surfaced under a
    /// different field name and renamed back in both sqlx and serde.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub job_type: Option<String>,

    /// Role description
    pub description: Option<String>,

    /// Free-text skill requirements
    pub required_skills: Option<String>,

    /// Free-text identity of whoever posted the listing
    pub poster: Option<String>,

    /// Insertion timestamp (store default)
    pub created_at: NaiveDateTime,
}

impl Job {
    /// Searches the board by case-insensitive substring
    ///
    /// Same contract as the mentor search, applied to title, company, and
    /// required skills. The empty query matches every row.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Self>, sqlx::Error> {
        let pattern = format!("%{}%", query.to_lowercase());

        sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, company, location, salary_range, type, description,
                   required_skills, poster, created_at
            FROM jobs
            WHERE lower(title) LIKE ? OR lower(company) LIKE ? OR lower(required_skills) LIKE ?
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(pool)
        .await
    }
}
