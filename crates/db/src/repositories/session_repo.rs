//! Repository for the `sessions` table.

use sqlx::PgPool;
use schoolhouse_core::session_period::SessionPeriod;
use schoolhouse_core::types::DbId;

use crate::models::session::{AcademicSession, CreateSession};

const COLUMNS: &str = "id, start_year, start_month, end_year, end_month, created_at, updated_at";

/// Provides CRUD operations for academic sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<AcademicSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (start_year, start_month, end_year, end_month)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AcademicSession>(&query)
            .bind(input.start_year)
            .bind(input.start_month)
            .bind(input.end_year)
            .bind(input.end_month)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AcademicSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, AcademicSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sessions, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AcademicSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             ORDER BY start_year DESC, start_month DESC, id DESC"
        );
        sqlx::query_as::<_, AcademicSession>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace the bounds of a session with an already-merged and validated period.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        period: &SessionPeriod,
    ) -> Result<Option<AcademicSession>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                start_year = $2,
                start_month = $3,
                end_year = $4,
                end_month = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AcademicSession>(&query)
            .bind(id)
            .bind(period.start_year)
            .bind(period.start_month)
            .bind(period.end_year)
            .bind(period.end_month)
            .fetch_optional(pool)
            .await
    }

    /// Count assignment and fee rows that still reference the session.
    pub async fn count_references(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM student_classes WHERE session_id = $1)
                  + (SELECT COUNT(*) FROM fees WHERE session_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
