//! Notice board entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `notices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// Unpublished notices are only visible in the admin panel.
    pub is_published: bool,
    pub published_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotice {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    /// Defaults to `true`.
    pub is_published: Option<bool>,
    /// Defaults to now.
    pub published_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNotice {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}
