//! Repository for the `fee_structure` table.

use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::fee_structure::{CreateFeeStructure, FeeStructure, UpdateFeeStructure};

const COLUMNS: &str =
    "id, class_name, admission_fee, annual_fee, monthly_fee, created_at, updated_at";

pub struct FeeStructureRepo;

impl FeeStructureRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeeStructure,
    ) -> Result<FeeStructure, sqlx::Error> {
        let query = format!(
            "INSERT INTO fee_structure (class_name, admission_fee, annual_fee, monthly_fee)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeeStructure>(&query)
            .bind(&input.class_name)
            .bind(input.admission_fee)
            .bind(input.annual_fee)
            .bind(input.monthly_fee)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FeeStructure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fee_structure WHERE id = $1");
        sqlx::query_as::<_, FeeStructure>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<FeeStructure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fee_structure ORDER BY id ASC");
        sqlx::query_as::<_, FeeStructure>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeeStructure,
    ) -> Result<Option<FeeStructure>, sqlx::Error> {
        let query = format!(
            "UPDATE fee_structure SET
                class_name = COALESCE($2, class_name),
                admission_fee = COALESCE($3, admission_fee),
                annual_fee = COALESCE($4, annual_fee),
                monthly_fee = COALESCE($5, monthly_fee)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeeStructure>(&query)
            .bind(id)
            .bind(&input.class_name)
            .bind(input.admission_fee)
            .bind(input.annual_fee)
            .bind(input.monthly_fee)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fee_structure WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
