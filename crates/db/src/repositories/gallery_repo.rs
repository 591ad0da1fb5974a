//! Repository for the `gallery` table.

use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::gallery::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};

const COLUMNS: &str = "id, title, image_url, category, created_at, updated_at";

pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(pool: &PgPool, input: &CreateGalleryItem) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery (title, image_url, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gallery items newest first, optionally restricted to one category.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery
             WHERE $1::TEXT IS NULL OR category = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery SET
                title = COALESCE($2, title),
                image_url = COALESCE($3, image_url),
                category = COALESCE($4, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
