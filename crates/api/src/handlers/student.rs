//! Handlers for the `/admin/students` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::fees::compute_fee_aggregate;
use schoolhouse_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use schoolhouse_core::student::{validate_mobile_number, StudentSort};
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::fee::{Fee, FeeFilter, StudentFeeReport};
use schoolhouse_db::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};
use schoolhouse_db::repositories::{FeeRepo, StudentRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::SessionScope;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/students`.
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    pub search: Option<String>,
    /// `name` (default), `registration`, `newest` or `oldest`.
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

/// POST /api/v1/admin/students
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<DataResponse<Student>>)> {
    input.validate()?;
    validate_mobile_number(&input.mobile_number)?;

    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        student_id = student.id,
        registration_number = %student.registration_number,
        "Student registered"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// GET /api/v1/admin/students
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<StudentListParams>,
) -> AppResult<Json<DataResponse<Vec<Student>>>> {
    let filter = StudentFilter {
        sort: StudentSort::parse(params.sort.as_deref())?,
        search: params.search,
        limit: clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        offset: clamp_offset(params.offset),
    };
    let students = StudentRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: students }))
}

/// GET /api/v1/admin/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Student>>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: student }))
}

/// PUT /api/v1/admin/students/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<DataResponse<Student>>> {
    input.validate()?;
    if let Some(mobile) = &input.mobile_number {
        validate_mobile_number(mobile)?;
    }

    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: student }))
}

/// DELETE /api/v1/admin/students/{id}
///
/// The student's assignments and fee records are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StudentRepo::delete(&state.pool, id).await? {
        tracing::info!(student_id = id, "Student deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/admin/students/{id}/fees[?session_id=]
///
/// The student's fee records with their totals and aggregate status.
pub async fn fees(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Query(scope): Query<SessionScope>,
) -> AppResult<Json<DataResponse<StudentFeeReport>>> {
    StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let filter = FeeFilter {
        student_id: Some(id),
        session_id: scope.session_id,
        ..Default::default()
    };
    let fees = FeeRepo::list(&state.pool, &filter).await?;
    let summary = compute_fee_aggregate(fees.iter().map(Fee::line));

    Ok(Json(DataResponse {
        data: StudentFeeReport {
            student_id: id,
            session_id: scope.session_id,
            fees,
            summary,
        },
    }))
}
