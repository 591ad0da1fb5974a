//! Fee record model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::fees::{FeeAggregate, FeeLine};
use schoolhouse_core::types::{DbId, Timestamp};

/// A row from the `fees` table.
///
/// `due_amount` is a generated column (`amount - paid_amount`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fee {
    pub id: DbId,
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: DbId,
    pub roll_number: String,
    pub month: i32,
    pub year: i32,
    pub amount: i64,
    pub paid_amount: i64,
    pub due_amount: i64,
    /// Admin-set status: `pending`, `partial`, `paid` or `overdue`.
    pub status: String,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Fee {
    pub fn line(&self) -> FeeLine {
        FeeLine {
            amount: self.amount,
            paid_amount: self.paid_amount,
        }
    }
}

/// A student's fee records together with their aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct StudentFeeReport {
    pub student_id: DbId,
    pub session_id: Option<DbId>,
    pub fees: Vec<Fee>,
    pub summary: FeeAggregate,
}

/// DTO for recording a fee.
///
/// When `roll_number` is omitted it is taken from the student's assignment
/// for the same class and session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFee {
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: DbId,
    pub roll_number: Option<String>,
    pub month: i32,
    pub year: i32,
    pub amount: i64,
    /// Defaults to 0.
    pub paid_amount: Option<i64>,
    /// Defaults to `pending`.
    pub status: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating a fee record. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFee {
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub amount: Option<i64>,
    pub paid_amount: Option<i64>,
    pub status: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Equality filters for listing fees.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeeFilter {
    pub student_id: Option<DbId>,
    pub class_id: Option<DbId>,
    pub session_id: Option<DbId>,
    pub status: Option<String>,
}
