//! Important dates shown on the public calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `important_dates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImportantDate {
    pub id: DbId,
    pub title: String,
    pub event_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateImportantDate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub event_date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateImportantDate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub description: Option<String>,
}
