pub mod health;
pub mod public;
pub mod school;
pub mod site_content;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notices                                  published notices (public)
/// /gallery                                  gallery (public, ?category)
/// /staff                                    staff directory (public)
/// /important-dates                          calendar (public, ?upcoming)
/// /fee-structure                            fee structure (public)
///
/// /admin/dashboard                          counters (admin only)
///
/// /admin/classes                            list, create
/// /admin/classes/{id}                       get, update, delete
/// /admin/classes/{id}/next-roll-number      suggested roll number
///
/// /admin/sessions                           list, create
/// /admin/sessions/{id}                      get, update, delete
///
/// /admin/students                           list (?search, sort, limit, offset), create
/// /admin/students/{id}                      get, update, delete
/// /admin/students/{id}/fees                 fee records + aggregate (?session_id)
///
/// /admin/assignments                        list (?student_id, class_id, session_id), create
/// /admin/assignments/{id}                   get, update, delete
///
/// /admin/fees                               list (?student_id, class_id, session_id, status), create
/// /admin/fees/{id}                          get, update, delete
///
/// /admin/fee-structure                      list, create
/// /admin/fee-structure/{id}                 get, update, delete
/// /admin/notices                            list (incl. drafts), create
/// /admin/notices/{id}                       get, update, delete
/// /admin/gallery                            list, create
/// /admin/gallery/{id}                       get, update, delete
/// /admin/staff                              list, create
/// /admin/staff/{id}                         get, update, delete
/// /admin/important-dates                    list, create
/// /admin/important-dates/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/dashboard", get(handlers::dashboard::summary))
        .nest("/classes", school::classes())
        .nest("/sessions", school::sessions())
        .nest("/students", school::students())
        .nest("/assignments", school::assignments())
        .nest("/fees", school::fees())
        .nest("/fee-structure", site_content::fee_structure_routes())
        .nest("/notices", site_content::notice_routes())
        .nest("/gallery", site_content::gallery_routes())
        .nest("/staff", site_content::staff_routes())
        .nest("/important-dates", site_content::important_date_routes());

    Router::new()
        .merge(public::router())
        .nest("/admin", admin)
}
