//! Handlers for gallery images.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::gallery::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use schoolhouse_db::repositories::GalleryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::CategoryFilter;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GalleryItem",
        id,
    })
}

/// GET /api/v1/gallery[?category=]
pub async fn list_public(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<DataResponse<Vec<GalleryItem>>>> {
    let items = GalleryRepo::list(&state.pool, filter.category.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/admin/gallery[?category=]
pub async fn list(
    state: State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    filter: Query<CategoryFilter>,
) -> AppResult<Json<DataResponse<Vec<GalleryItem>>>> {
    list_public(state, filter).await
}

/// POST /api/v1/admin/gallery
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<DataResponse<GalleryItem>>)> {
    input.validate()?;
    let item = GalleryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/admin/gallery/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryItem>>> {
    let item = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/admin/gallery/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<Json<DataResponse<GalleryItem>>> {
    input.validate()?;
    let item = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/gallery/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GalleryRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
