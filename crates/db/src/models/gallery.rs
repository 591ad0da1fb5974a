//! Gallery images. Files live in object storage; rows hold the URL.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `gallery` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryItem {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGalleryItem {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    pub category: Option<String>,
}
