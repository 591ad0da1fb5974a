//! Unauthenticated routes backing the public school site.

use axum::routing::get;
use axum::Router;

use crate::handlers::{fee_structure, gallery, important_date, notice, staff};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET /notices                          -> published notices
/// GET /gallery[?category=]              -> gallery items
/// GET /staff                            -> staff directory
/// GET /important-dates[?upcoming=true]  -> calendar
/// GET /fee-structure                    -> per-class fees
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notices", get(notice::list_published))
        .route("/gallery", get(gallery::list_public))
        .route("/staff", get(staff::list_public))
        .route("/important-dates", get(important_date::list_public))
        .route("/fee-structure", get(fee_structure::list_public))
}
