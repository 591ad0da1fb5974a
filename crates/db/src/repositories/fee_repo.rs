//! Repository for the `fees` table.

use sqlx::PgPool;
use schoolhouse_core::fees::FEE_STATUS_PENDING;
use schoolhouse_core::types::DbId;

use crate::models::fee::{CreateFee, Fee, FeeFilter, UpdateFee};

const COLUMNS: &str = "id, student_id, class_id, session_id, roll_number, month, year, \
    amount, paid_amount, due_amount, status, payment_date, notes, created_at, updated_at";

/// Provides CRUD operations for fee records.
pub struct FeeRepo;

impl FeeRepo {
    /// Insert a fee record with an already-resolved roll number.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFee,
        roll_number: &str,
    ) -> Result<Fee, sqlx::Error> {
        let query = format!(
            "INSERT INTO fees
                (student_id, class_id, session_id, roll_number, month, year,
                 amount, paid_amount, status, payment_date, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0), COALESCE($9, $10), $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(input.student_id)
            .bind(input.class_id)
            .bind(input.session_id)
            .bind(roll_number)
            .bind(input.month)
            .bind(input.year)
            .bind(input.amount)
            .bind(input.paid_amount)
            .bind(&input.status)
            .bind(FEE_STATUS_PENDING)
            .bind(input.payment_date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fees WHERE id = $1");
        sqlx::query_as::<_, Fee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List fee records matching whichever filters are set, newest billing period first.
    pub async fn list(pool: &PgPool, filter: &FeeFilter) -> Result<Vec<Fee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fees
             WHERE ($1::BIGINT IS NULL OR student_id = $1)
               AND ($2::BIGINT IS NULL OR class_id = $2)
               AND ($3::BIGINT IS NULL OR session_id = $3)
               AND ($4::TEXT IS NULL OR status = $4)
             ORDER BY year DESC, month DESC, id DESC"
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(filter.student_id)
            .bind(filter.class_id)
            .bind(filter.session_id)
            .bind(&filter.status)
            .fetch_all(pool)
            .await
    }

    /// Update a fee record. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFee,
    ) -> Result<Option<Fee>, sqlx::Error> {
        let query = format!(
            "UPDATE fees SET
                month = COALESCE($2, month),
                year = COALESCE($3, year),
                amount = COALESCE($4, amount),
                paid_amount = COALESCE($5, paid_amount),
                status = COALESCE($6, status),
                payment_date = COALESCE($7, payment_date),
                notes = COALESCE($8, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(id)
            .bind(input.month)
            .bind(input.year)
            .bind(input.amount)
            .bind(input.paid_amount)
            .bind(&input.status)
            .bind(input.payment_date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
