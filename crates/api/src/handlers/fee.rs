//! Handlers for the `/admin/fees` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use schoolhouse_core::error::CoreError;
use schoolhouse_core::fees::{validate_fee_amounts, validate_fee_month, validate_fee_status};
use schoolhouse_core::roll_number::validate_roll_number;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::fee::{CreateFee, Fee, FeeFilter, UpdateFee};
use schoolhouse_db::repositories::{FeeRepo, StudentClassRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Fee", id })
}

/// Resolve the roll number a new fee record is filed under.
///
/// An explicit value must be well-formed. Otherwise it is copied from the
/// student's assignment for the same class and session.
async fn resolve_roll_number(state: &AppState, input: &CreateFee) -> AppResult<String> {
    if let Some(roll_number) = &input.roll_number {
        if !validate_roll_number(roll_number) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Roll number '{roll_number}' must be exactly 6 digits"
            ))));
        }
        return Ok(roll_number.clone());
    }

    let assignment = StudentClassRepo::find_for_student(
        &state.pool,
        input.student_id,
        input.class_id,
        input.session_id,
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Student {} has no assignment in class {} for session {}; roll_number is required",
            input.student_id, input.class_id, input.session_id
        )))
    })?;
    Ok(assignment.roll_number)
}

/// POST /api/v1/admin/fees
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFee>,
) -> AppResult<(StatusCode, Json<DataResponse<Fee>>)> {
    validate_fee_month(input.month)?;
    validate_fee_amounts(Some(input.amount), input.paid_amount)?;
    if let Some(status) = &input.status {
        validate_fee_status(status)?;
    }
    let roll_number = resolve_roll_number(&state, &input).await?;

    let fee = FeeRepo::create(&state.pool, &input, &roll_number).await?;
    tracing::info!(
        fee_id = fee.id,
        student_id = fee.student_id,
        month = fee.month,
        year = fee.year,
        amount = fee.amount,
        "Fee recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: fee })))
}

/// GET /api/v1/admin/fees[?student_id=&class_id=&session_id=&status=]
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(filter): Query<FeeFilter>,
) -> AppResult<Json<DataResponse<Vec<Fee>>>> {
    if let Some(status) = &filter.status {
        validate_fee_status(status)?;
    }
    let fees = FeeRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: fees }))
}

/// GET /api/v1/admin/fees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Fee>>> {
    let fee = FeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: fee }))
}

/// PUT /api/v1/admin/fees/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFee>,
) -> AppResult<Json<DataResponse<Fee>>> {
    if let Some(month) = input.month {
        validate_fee_month(month)?;
    }
    validate_fee_amounts(input.amount, input.paid_amount)?;
    if let Some(status) = &input.status {
        validate_fee_status(status)?;
    }

    let fee = FeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(fee_id = id, due_amount = fee.due_amount, status = %fee.status, "Fee updated");
    Ok(Json(DataResponse { data: fee }))
}

/// DELETE /api/v1/admin/fees/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FeeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
