/// User model and database operations
///
/// The API serves exactly one profile: the row with id 1, created by the
/// seeder. There is no account system and no other user row is ever read
/// or written.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     full_name TEXT,
///     current_role TEXT,
///     company TEXT,
///     skills TEXT,
///     bio TEXT,
///     available_for_mentorship INTEGER DEFAULT 0
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use alumnet_shared::models::user::{ProfileUpdate, User};
/// # use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let profile = User::find_profile(&pool).await?;
/// println!("profile: {:?}", profile);
///
/// let update = ProfileUpdate {
///     full_name: Some("Priya Sharma".to_string()),
///     available_for_mentorship: 1,
///     ..Default::default()
/// };
/// let updated = User::overwrite_profile(&pool, update).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// The id of the single profile row the API operates on
pub const PROFILE_USER_ID: i64 = 1;

/// User model representing the profile row
///
/// All text columns are nullable: a profile update may overwrite any of
/// them with NULL, and the JSON representation carries that through as
/// `null` rather than omitting the field.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Row id (always 1 for the served profile)
    pub id: i64,

    /// Display name
    pub full_name: Option<String>,

    /// Current job title
    pub current_role: Option<String>,

    /// Current employer
    pub company: Option<String>,

    /// Comma-separated free-text skill list
    pub skills: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    /// Mentorship availability flag, stored as 0 or 1
    pub available_for_mentorship: i64,
}

/// Input for overwriting the profile row
///
/// Every field is written unconditionally: a `None` here becomes NULL in
/// the row, erasing whatever was there before. There are no partial-update
/// semantics. The mentorship flag arrives already normalized to 0/1 by the
/// HTTP layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub full_name: Option<String>,

    /// New job title
    pub current_role: Option<String>,

    /// New employer
    pub company: Option<String>,

    /// New skill list
    pub skills: Option<String>,

    /// New biography
    pub bio: Option<String>,

    /// Mentorship availability, 0 or 1
    pub available_for_mentorship: i64,
}

impl User {
    /// Fetches the profile row
    ///
    /// # Returns
    ///
    /// The row if it exists, `None` otherwise — a store where seeding never
    /// ran simply has no profile, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query itself fails
    pub async fn find_profile(pool: &SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, current_role, company, skills, bio, available_for_mentorship
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(PROFILE_USER_ID)
        .fetch_optional(pool)
        .await
    }

    /// Overwrites all six profile fields and returns the resulting row
    ///
    /// The UPDATE targets row id 1 only. If that row does not exist the
    /// statement matches nothing and the re-read returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the UPDATE or the re-read fails
    pub async fn overwrite_profile(
        pool: &SqlitePool,
        data: ProfileUpdate,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET full_name = ?, current_role = ?, company = ?, skills = ?, bio = ?,
                available_for_mentorship = ?
            WHERE id = ?
            "#,
        )
        .bind(data.full_name)
        .bind(data.current_role)
        .bind(data.company)
        .bind(data.skills)
        .bind(data.bio)
        .bind(data.available_for_mentorship)
        .bind(PROFILE_USER_ID)
        .execute(pool)
        .await?;

        Self::find_profile(pool).await
    }
}
