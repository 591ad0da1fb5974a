//! Repository for the `important_dates` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::important_date::{CreateImportantDate, ImportantDate, UpdateImportantDate};

const COLUMNS: &str = "id, title, event_date, description, created_at, updated_at";

pub struct ImportantDateRepo;

impl ImportantDateRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateImportantDate,
    ) -> Result<ImportantDate, sqlx::Error> {
        let query = format!(
            "INSERT INTO important_dates (title, event_date, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImportantDate>(&query)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ImportantDate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM important_dates WHERE id = $1");
        sqlx::query_as::<_, ImportantDate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List dates in calendar order, optionally only those on or after `from`.
    pub async fn list(
        pool: &PgPool,
        from: Option<NaiveDate>,
    ) -> Result<Vec<ImportantDate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM important_dates
             WHERE $1::DATE IS NULL OR event_date >= $1
             ORDER BY event_date ASC, id ASC"
        );
        sqlx::query_as::<_, ImportantDate>(&query)
            .bind(from)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateImportantDate,
    ) -> Result<Option<ImportantDate>, sqlx::Error> {
        let query = format!(
            "UPDATE important_dates SET
                title = COALESCE($2, title),
                event_date = COALESCE($3, event_date),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ImportantDate>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM important_dates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
