//! Handlers for the staff directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::staff::{CreateStaffMember, StaffMember, UpdateStaffMember};
use schoolhouse_db::repositories::StaffRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "StaffMember",
        id,
    })
}

/// GET /api/v1/staff
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StaffMember>>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: staff }))
}

/// GET /api/v1/admin/staff
pub async fn list(
    state: State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<StaffMember>>>> {
    list_public(state).await
}

/// POST /api/v1/admin/staff
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateStaffMember>,
) -> AppResult<(StatusCode, Json<DataResponse<StaffMember>>)> {
    input.validate()?;
    let member = StaffRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// GET /api/v1/admin/staff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StaffMember>>> {
    let member = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: member }))
}

/// PUT /api/v1/admin/staff/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaffMember>,
) -> AppResult<Json<DataResponse<StaffMember>>> {
    input.validate()?;
    let member = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/admin/staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StaffRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
