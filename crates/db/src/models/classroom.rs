//! Class entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassRoom {
    pub id: DbId,
    pub class_number: String,
    /// One uppercase letter and three digits, e.g. `A101`.
    pub class_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new class.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClassRoom {
    #[validate(length(min = 1, message = "class_number must not be empty"))]
    pub class_number: String,
    pub class_code: String,
}

/// DTO for updating an existing class. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClassRoom {
    #[validate(length(min = 1, message = "class_number must not be empty"))]
    pub class_number: Option<String>,
    pub class_code: Option<String>,
}
