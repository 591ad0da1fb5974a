//! Handlers for the `/admin/sessions` resource.
//!
//! Sessions are always returned as [`SessionSummary`] so clients get the
//! display label and lapsed flag alongside the stored bounds.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use schoolhouse_core::error::CoreError;
use schoolhouse_core::session_period::validate_session_range;
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::session::{CreateSession, SessionSummary, UpdateSession};
use schoolhouse_db::repositories::SessionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Session",
        id,
    })
}

/// POST /api/v1/admin/sessions
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateSession>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionSummary>>)> {
    validate_session_range(&input.period())?;

    let session = SessionRepo::create(&state.pool, &input).await?;
    tracing::info!(session_id = session.id, label = %session.period().label(), "Session created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionSummary::new(session, today()),
        }),
    ))
}

/// GET /api/v1/admin/sessions
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<SessionSummary>>>> {
    let today = today();
    let sessions: Vec<SessionSummary> = SessionRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|s| SessionSummary::new(s, today))
        .collect();
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /api/v1/admin/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SessionSummary>>> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: SessionSummary::new(session, today()),
    }))
}

/// PUT /api/v1/admin/sessions/{id}
///
/// Partial fields are merged over the stored bounds before the range check.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSession>,
) -> AppResult<Json<DataResponse<SessionSummary>>> {
    let current = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let period = input.merged_period(&current);
    validate_session_range(&period)?;

    let session = SessionRepo::update(&state.pool, id, &period)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: SessionSummary::new(session, today()),
    }))
}

/// DELETE /api/v1/admin/sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let references = SessionRepo::count_references(&state.pool, id).await?;
    if references > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Session {id} is referenced by {references} assignment or fee record(s)"
        ))));
    }

    if SessionRepo::delete(&state.pool, id).await? {
        tracing::info!(session_id = id, "Session deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
