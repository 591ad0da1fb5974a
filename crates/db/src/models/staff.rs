//! Staff directory entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffMember {
    pub id: DbId,
    pub name: String,
    pub designation: String,
    pub qualification: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    /// Lower values are listed first.
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaffMember {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "designation must not be empty"))]
    pub designation: String,
    pub qualification: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    /// Defaults to 0.
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStaffMember {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "designation must not be empty"))]
    pub designation: Option<String>,
    pub qualification: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}
