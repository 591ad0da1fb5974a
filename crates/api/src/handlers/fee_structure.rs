//! Handlers for the per-class fee structure.
//!
//! `GET /fee-structure` is public; writes live under `/admin/fee-structure`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::fee_structure::{
    CreateFeeStructure, FeeStructure, UpdateFeeStructure,
};
use schoolhouse_db::repositories::FeeStructureRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "FeeStructure",
        id,
    })
}

/// GET /api/v1/fee-structure
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FeeStructure>>>> {
    let rows = FeeStructureRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/admin/fee-structure
pub async fn list(
    state: State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<FeeStructure>>>> {
    list_public(state).await
}

/// POST /api/v1/admin/fee-structure
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFeeStructure>,
) -> AppResult<(StatusCode, Json<DataResponse<FeeStructure>>)> {
    input.validate()?;
    let row = FeeStructureRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /api/v1/admin/fee-structure/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FeeStructure>>> {
    let row = FeeStructureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/v1/admin/fee-structure/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeeStructure>,
) -> AppResult<Json<DataResponse<FeeStructure>>> {
    input.validate()?;
    let row = FeeStructureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/admin/fee-structure/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FeeStructureRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
