//! Per-class fee structure (reference data shown on the admissions page).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `fee_structure` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeeStructure {
    pub id: DbId,
    pub class_name: String,
    pub admission_fee: i64,
    pub annual_fee: i64,
    pub monthly_fee: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeeStructure {
    #[validate(length(min = 1, message = "class_name must not be empty"))]
    pub class_name: String,
    #[validate(range(min = 0, message = "admission_fee must not be negative"))]
    pub admission_fee: i64,
    #[validate(range(min = 0, message = "annual_fee must not be negative"))]
    pub annual_fee: i64,
    #[validate(range(min = 0, message = "monthly_fee must not be negative"))]
    pub monthly_fee: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFeeStructure {
    #[validate(length(min = 1, message = "class_name must not be empty"))]
    pub class_name: Option<String>,
    #[validate(range(min = 0, message = "admission_fee must not be negative"))]
    pub admission_fee: Option<i64>,
    #[validate(range(min = 0, message = "annual_fee must not be negative"))]
    pub annual_fee: Option<i64>,
    #[validate(range(min = 0, message = "monthly_fee must not be negative"))]
    pub monthly_fee: Option<i64>,
}
