//! Admin routes for the school records: classes, sessions, students,
//! assignments and fees.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assignment, classroom, fee, session, student};
use crate::state::AppState;

/// Routes mounted at `/admin/classes`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /{id}/next-roll-number  -> next_roll_number
/// ```
pub fn classes() -> Router<AppState> {
    Router::new()
        .route("/", get(classroom::list).post(classroom::create))
        .route(
            "/{id}",
            get(classroom::get_by_id)
                .put(classroom::update)
                .delete(classroom::delete),
        )
        .route("/{id}/next-roll-number", get(classroom::next_roll_number))
}

/// Routes mounted at `/admin/sessions`.
pub fn sessions() -> Router<AppState> {
    Router::new()
        .route("/", get(session::list).post(session::create))
        .route(
            "/{id}",
            get(session::get_by_id)
                .put(session::update)
                .delete(session::delete),
        )
}

/// Routes mounted at `/admin/students`.
///
/// ```text
/// GET    /                       -> list (?search, sort, limit, offset)
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /{id}/fees              -> fees (?session_id)
/// ```
pub fn students() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list).post(student::create))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
        .route("/{id}/fees", get(student::fees))
}

/// Routes mounted at `/admin/assignments`.
pub fn assignments() -> Router<AppState> {
    Router::new()
        .route("/", get(assignment::list).post(assignment::create))
        .route(
            "/{id}",
            get(assignment::get_by_id)
                .put(assignment::update)
                .delete(assignment::delete),
        )
}

/// Routes mounted at `/admin/fees`.
pub fn fees() -> Router<AppState> {
    Router::new()
        .route("/", get(fee::list).post(fee::create))
        .route(
            "/{id}",
            get(fee::get_by_id).put(fee::update).delete(fee::delete),
        )
}
