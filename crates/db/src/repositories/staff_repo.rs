//! Repository for the `staff` table.

use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::staff::{CreateStaffMember, StaffMember, UpdateStaffMember};

const COLUMNS: &str = "id, name, designation, qualification, email, phone, image_url, \
    sort_order, created_at, updated_at";

pub struct StaffRepo;

impl StaffRepo {
    pub async fn create(pool: &PgPool, input: &CreateStaffMember) -> Result<StaffMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff
                (name, designation, qualification, email, phone, image_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(&input.name)
            .bind(&input.designation)
            .bind(&input.qualification)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StaffMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List staff by display order, then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<StaffMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY sort_order ASC, name ASC");
        sqlx::query_as::<_, StaffMember>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaffMember,
    ) -> Result<Option<StaffMember>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                name = COALESCE($2, name),
                designation = COALESCE($3, designation),
                qualification = COALESCE($4, qualification),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                image_url = COALESCE($7, image_url),
                sort_order = COALESCE($8, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.designation)
            .bind(&input.qualification)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
