//! Handlers for the `/admin/classes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use schoolhouse_core::class_code::validate_class_fields;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::classroom::{ClassRoom, CreateClassRoom, UpdateClassRoom};
use schoolhouse_db::repositories::ClassRoomRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /admin/classes/{id}/next-roll-number`.
#[derive(Debug, Serialize)]
pub struct NextRollNumber {
    pub class_id: DbId,
    pub suggested_roll_number: String,
}

/// POST /api/v1/admin/classes
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateClassRoom>,
) -> AppResult<(StatusCode, Json<DataResponse<ClassRoom>>)> {
    input.validate()?;
    validate_class_fields(Some(&input.class_number), Some(&input.class_code))?;

    let class = ClassRoomRepo::create(&state.pool, &input).await?;
    tracing::info!(class_id = class.id, class_code = %class.class_code, "Class created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: class })))
}

/// GET /api/v1/admin/classes
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<ClassRoom>>>> {
    let classes = ClassRoomRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: classes }))
}

/// GET /api/v1/admin/classes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ClassRoom>>> {
    let class = ClassRoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Class", id }))?;
    Ok(Json(DataResponse { data: class }))
}

/// PUT /api/v1/admin/classes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClassRoom>,
) -> AppResult<Json<DataResponse<ClassRoom>>> {
    input.validate()?;
    validate_class_fields(input.class_number.as_deref(), input.class_code.as_deref())?;

    let class = ClassRoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Class", id }))?;
    Ok(Json(DataResponse { data: class }))
}

/// DELETE /api/v1/admin/classes/{id}
///
/// Refused with 409 while assignments or fee records still reference the class.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let references = ClassRoomRepo::count_references(&state.pool, id).await?;
    if references > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Class {id} is referenced by {references} assignment or fee record(s)"
        ))));
    }

    if ClassRoomRepo::delete(&state.pool, id).await? {
        tracing::info!(class_id = id, "Class deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Class", id }))
    }
}

/// GET /api/v1/admin/classes/{id}/next-roll-number
pub async fn next_roll_number(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<NextRollNumber>>> {
    let suggested_roll_number = state.assignments.suggest_roll_number(id).await?;
    Ok(Json(DataResponse {
        data: NextRollNumber {
            class_id: id,
            suggested_roll_number,
        },
    }))
}
