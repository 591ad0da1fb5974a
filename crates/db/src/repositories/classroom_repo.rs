//! Repository for the `classes` table.

use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::classroom::{ClassRoom, CreateClassRoom, UpdateClassRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_number, class_code, created_at, updated_at";

/// Provides CRUD operations for classes.
pub struct ClassRoomRepo;

impl ClassRoomRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClassRoom) -> Result<ClassRoom, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (class_number, class_code)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassRoom>(&query)
            .bind(&input.class_number)
            .bind(&input.class_code)
            .fetch_one(pool)
            .await
    }

    /// Find a class by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClassRoom>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, ClassRoom>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes ordered by class code.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClassRoom>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY class_code ASC");
        sqlx::query_as::<_, ClassRoom>(&query).fetch_all(pool).await
    }

    /// Update a class. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClassRoom,
    ) -> Result<Option<ClassRoom>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                class_number = COALESCE($2, class_number),
                class_code = COALESCE($3, class_code)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassRoom>(&query)
            .bind(id)
            .bind(&input.class_number)
            .bind(&input.class_code)
            .fetch_optional(pool)
            .await
    }

    /// Count assignment and fee rows that still reference the class.
    pub async fn count_references(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM student_classes WHERE class_id = $1)
                  + (SELECT COUNT(*) FROM fees WHERE class_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Permanently delete a class by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
