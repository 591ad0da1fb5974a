use axum::extract::State;
use axum::Json;
use schoolhouse_db::models::dashboard::DashboardSummary;
use schoolhouse_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard
pub async fn summary(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
