//! Repository for the `notices` table.

use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::notice::{CreateNotice, Notice, UpdateNotice};

const COLUMNS: &str = "id, title, content, is_published, published_at, created_at, updated_at";

pub struct NoticeRepo;

impl NoticeRepo {
    pub async fn create(pool: &PgPool, input: &CreateNotice) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices (title, content, is_published, published_at)
             VALUES ($1, $2, COALESCE($3, TRUE), COALESCE($4, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notices newest first. When `published_only` is set, drafts are excluded.
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<Notice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notices
             WHERE NOT $1 OR is_published
             ORDER BY published_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotice,
    ) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                is_published = COALESCE($4, is_published),
                published_at = COALESCE($5, published_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
