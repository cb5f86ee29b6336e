/// Schema setup
///
/// Creates the four tables the server works with. Every statement is
/// `CREATE TABLE IF NOT EXISTS`, so running this against an already
/// populated database file is a no-op. There is no migration path: the
/// schema is fixed, and changing it means recreating the file.

use sqlx::SqlitePool;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT,
    current_role TEXT,
    company TEXT,
    skills TEXT,
    bio TEXT,
    available_for_mentorship INTEGER DEFAULT 0
)
"#;

const CREATE_MENTORS: &str = r#"
CREATE TABLE IF NOT EXISTS mentors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT,
    title TEXT,
    institution TEXT,
    experience_years INTEGER,
    skills TEXT,
    bio TEXT,
    availability INTEGER DEFAULT 1
)
"#;

const CREATE_JOBS: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    company TEXT,
    location TEXT,
    salary_range TEXT,
    type TEXT,
    description TEXT,
    required_skills TEXT,
    poster TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_NOTIFICATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS notifications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    message TEXT,
    is_read INTEGER DEFAULT 0,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Ensures all tables exist
///
/// # Errors
///
/// Returns an error if any CREATE statement fails to execute
///
/// # Example
///
/// ```no_run
/// use alumnet_shared::db::pool::{create_pool, DatabaseConfig};
/// use alumnet_shared::db::schema::init_schema;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// init_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_MENTORS).execute(pool).await?;
    sqlx::query(CREATE_JOBS).execute(pool).await?;
    sqlx::query(CREATE_NOTIFICATIONS).execute(pool).await?;

    info!("Database schema is in place");
    Ok(())
}
