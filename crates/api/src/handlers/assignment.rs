//! Handlers for the `/admin/assignments` resource.
//!
//! Writes go through [`AssignmentService`](crate::enrollment::AssignmentService);
//! reads return the assignment joined with student, class and session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::student_class::{
    CreateStudentClass, StudentClassDetail, StudentClassFilter, UpdateStudentClass,
};
use schoolhouse_db::repositories::StudentClassRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Assignment",
        id,
    })
}

async fn load_detail(state: &AppState, id: DbId) -> AppResult<StudentClassDetail> {
    StudentClassRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/admin/assignments
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateStudentClass>,
) -> AppResult<(StatusCode, Json<DataResponse<StudentClassDetail>>)> {
    let created = state.assignments.assign(&input).await?;
    let detail = load_detail(&state, created.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/admin/assignments[?student_id=&class_id=&session_id=]
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(filter): Query<StudentClassFilter>,
) -> AppResult<Json<DataResponse<Vec<StudentClassDetail>>>> {
    let rows = StudentClassRepo::list_detailed(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/admin/assignments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StudentClassDetail>>> {
    let detail = load_detail(&state, id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/admin/assignments/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudentClass>,
) -> AppResult<Json<DataResponse<StudentClassDetail>>> {
    state.assignments.update(id, &input).await?;
    let detail = load_detail(&state, id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/admin/assignments/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.assignments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
