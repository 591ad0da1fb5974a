//! Handlers for notice board entries.
//!
//! The public listing hides unpublished notices; the admin listing shows all.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::notice::{CreateNotice, Notice, UpdateNotice};
use schoolhouse_db::repositories::NoticeRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Notice",
        id,
    })
}

/// GET /api/v1/notices
pub async fn list_published(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Notice>>>> {
    let notices = NoticeRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: notices }))
}

/// GET /api/v1/admin/notices
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Notice>>>> {
    let notices = NoticeRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: notices }))
}

/// POST /api/v1/admin/notices
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateNotice>,
) -> AppResult<(StatusCode, Json<DataResponse<Notice>>)> {
    input.validate()?;
    let notice = NoticeRepo::create(&state.pool, &input).await?;
    tracing::info!(notice_id = notice.id, published = notice.is_published, "Notice created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: notice })))
}

/// GET /api/v1/admin/notices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notice>>> {
    let notice = NoticeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: notice }))
}

/// PUT /api/v1/admin/notices/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNotice>,
) -> AppResult<Json<DataResponse<Notice>>> {
    input.validate()?;
    let notice = NoticeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: notice }))
}

/// DELETE /api/v1/admin/notices/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NoticeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
