/// Mentor model and directory search
///
/// Mentors are created by the seeder only; the API surface is read-only.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Mentor directory entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Mentor {
    pub id: i64,

    /// Display name
    pub full_name: Option<String>,

    /// Role and employer, e.g. "Senior Product Manager @ Google"
    pub title: Option<String>,

    /// Alma mater
    pub institution: Option<String>,

    /// Years of professional experience
    pub experience_years: Option<i64>,

    /// Free-text skill list
    pub skills: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    /// Availability flag, stored as 0 or 1 (defaults to 1)
    pub availability: i64,
}

impl Mentor {
    /// Searches the directory by case-insensitive substring
    ///
    /// A mentor matches when `query` appears in the full name, the skill
    /// list, or the title (OR semantics). The empty query matches every
    /// row. Results come back in the store's natural row order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Self>, sqlx::Error> {
        let pattern = format!("%{}%", query.to_lowercase());

        sqlx::query_as::<_, Mentor>(
            r#"
            SELECT id, full_name, title, institution, experience_years, skills, bio, availability
            FROM mentors
            WHERE lower(full_name) LIKE ? OR lower(skills) LIKE ? OR lower(title) LIKE ?
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(pool)
        .await
    }
}
