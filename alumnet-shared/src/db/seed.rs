/// Demo-data seeder
///
/// Populates empty tables with a small fixed dataset: one profile row, two
/// mentors, and two job listings. Each table is only touched when its row
/// count is exactly zero, so seeding is idempotent and a restart against a
/// populated database changes nothing.
///
/// Seeding is fire-and-forget from the server's point of view: the caller
/// logs a failure and keeps serving.

use sqlx::SqlitePool;
use tracing::{debug, info};

/// Seeds users, mentors, and jobs if their tables are empty
///
/// # Errors
///
/// Returns the first datastore error encountered; partial seeding is not
/// rolled back.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    seed_users(pool).await?;
    seed_mentors(pool).await?;
    seed_jobs(pool).await?;
    Ok(())
}

async fn table_is_empty(pool: &SqlitePool, count_sql: &str) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(count_sql).fetch_one(pool).await?;
    Ok(count == 0)
}

async fn seed_users(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "SELECT COUNT(*) FROM users").await? {
        debug!("users table already populated, skipping seed");
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO users (full_name, current_role, company, skills, bio, available_for_mentorship)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("Priya Sharma")
    .bind("Software Engineer")
    .bind("TCS")
    .bind("JavaScript, React, Node.js, Python")
    .bind("Passionate software engineer with 3 years of experience...")
    .bind(1i64)
    .execute(pool)
    .await?;

    info!("Seeded demo user profile");
    Ok(())
}

async fn seed_mentors(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "SELECT COUNT(*) FROM mentors").await? {
        debug!("mentors table already populated, skipping seed");
        return Ok(());
    }

    let mentors: [(&str, &str, &str, i64, &str, &str); 2] = [
        (
            "Rajesh Kumar",
            "Senior Product Manager @ Google",
            "IIT Delhi",
            12,
            "Product Management, AI/ML, Strategy",
            "Product leader with strong AI background.",
        ),
        (
            "Anita Sharma",
            "Tech Lead @ Microsoft",
            "BITS Pilani",
            10,
            "Software Engineering, Cloud, Leadership",
            "Engineering leader focusing on cloud platforms.",
        ),
    ];

    for (full_name, title, institution, experience_years, skills, bio) in mentors {
        sqlx::query(
            r#"
            INSERT INTO mentors (full_name, title, institution, experience_years, skills, bio)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(full_name)
        .bind(title)
        .bind(institution)
        .bind(experience_years)
        .bind(skills)
        .bind(bio)
        .execute(pool)
        .await?;
    }

    info!("Seeded demo mentors");
    Ok(())
}

async fn seed_jobs(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "SELECT COUNT(*) FROM jobs").await? {
        debug!("jobs table already populated, skipping seed");
        return Ok(());
    }

    let jobs: [(&str, &str, &str, &str, &str, &str, &str, &str); 2] = [
        (
            "Product Manager - AI Products",
            "Google",
            "Vijayawada",
            "25-35 LPA",
            "Full-time",
            "Lead AI Product initiatives...",
            "Product Management, ML, Strategy",
            "Company HR",
        ),
        (
            "Senior Software Engineer",
            "Microsoft",
            "Hyderabad",
            "30-40 LPA",
            "Full-time",
            "Work on large-scale cloud services...",
            "C#, Distributed Systems",
            "Team Lead",
        ),
    ];

    for (title, company, location, salary_range, job_type, description, required_skills, poster) in
        jobs
    {
        sqlx::query(
            r#"
            INSERT INTO jobs (title, company, location, salary_range, type, description, required_skills, poster)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(title)
        .bind(company)
        .bind(location)
        .bind(salary_range)
        .bind(job_type)
        .bind(description)
        .bind(required_skills)
        .bind(poster)
        .execute(pool)
        .await?;
    }

    info!("Seeded demo job listings");
    Ok(())
}
