//! Repository for the `applications` table.

use recruit_core::application::NewApplication;
use sqlx::PgPool;

use crate::models::application::{encode_projects, ApplicationRow};

/// Column list for `applications` queries.
const COLUMNS: &str = "\
    id, name, roll_number, branch, year_of_study, preferred_position, \
    github_profile, linkedin_profile, notes, projects, created_at, updated_at";

/// Insert and read operations for applications. Rows are never updated
/// or deleted.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a validated application, returning the full row.
    ///
    /// `id`, `created_at` and `updated_at` are assigned by the database.
    pub async fn create(
        pool: &PgPool,
        input: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications \
                (name, roll_number, branch, year_of_study, preferred_position, \
                 github_profile, linkedin_profile, notes, projects) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(&input.name)
            .bind(&input.roll_number)
            .bind(input.branch.label())
            .bind(input.year_of_study)
            .bind(input.preferred_position.label())
            .bind(&input.github_profile)
            .bind(&input.linkedin_profile)
            .bind(&input.notes)
            .bind(encode_projects(&input.projects))
            .fetch_one(pool)
            .await
    }

    /// Whether an application with exactly this roll number exists.
    pub async fn exists_by_roll_number(
        pool: &PgPool,
        roll_number: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM applications WHERE roll_number = $1)")
                .bind(roll_number)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// All applications, newest first.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<ApplicationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications ORDER BY created_at DESC, id");
        sqlx::query_as::<_, ApplicationRow>(&query)
            .fetch_all(pool)
            .await
    }
}
