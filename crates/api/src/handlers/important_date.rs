//! Handlers for the important-dates calendar.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::important_date::{
    CreateImportantDate, ImportantDate, UpdateImportantDate,
};
use schoolhouse_db::repositories::ImportantDateRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::UpcomingParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ImportantDate",
        id,
    })
}

/// GET /api/v1/important-dates[?upcoming=true]
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<UpcomingParams>,
) -> AppResult<Json<DataResponse<Vec<ImportantDate>>>> {
    let from = params.upcoming.then(|| Utc::now().date_naive());
    let dates = ImportantDateRepo::list(&state.pool, from).await?;
    Ok(Json(DataResponse { data: dates }))
}

/// GET /api/v1/admin/important-dates[?upcoming=true]
pub async fn list(
    state: State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    params: Query<UpcomingParams>,
) -> AppResult<Json<DataResponse<Vec<ImportantDate>>>> {
    list_public(state, params).await
}

/// POST /api/v1/admin/important-dates
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateImportantDate>,
) -> AppResult<(StatusCode, Json<DataResponse<ImportantDate>>)> {
    input.validate()?;
    let date = ImportantDateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: date })))
}

/// GET /api/v1/admin/important-dates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ImportantDate>>> {
    let date = ImportantDateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: date }))
}

/// PUT /api/v1/admin/important-dates/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateImportantDate>,
) -> AppResult<Json<DataResponse<ImportantDate>>> {
    input.validate()?;
    let date = ImportantDateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: date }))
}

/// DELETE /api/v1/admin/important-dates/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ImportantDateRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
