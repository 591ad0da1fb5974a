//! Admin routes for the public site content.
//!
//! Every resource here has the same shape:
//!
//! ```text
//! GET    /      -> list
//! POST   /      -> create
//! GET    /{id}  -> get_by_id
//! PUT    /{id}  -> update
//! DELETE /{id}  -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{fee_structure, gallery, important_date, notice, staff};
use crate::state::AppState;

pub fn fee_structure_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(fee_structure::list).post(fee_structure::create))
        .route(
            "/{id}",
            get(fee_structure::get_by_id)
                .put(fee_structure::update)
                .delete(fee_structure::delete),
        )
}

pub fn notice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notice::list).post(notice::create))
        .route(
            "/{id}",
            get(notice::get_by_id)
                .put(notice::update)
                .delete(notice::delete),
        )
}

pub fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route(
            "/{id}",
            get(gallery::get_by_id)
                .put(gallery::update)
                .delete(gallery::delete),
        )
}

pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(staff::list).post(staff::create))
        .route(
            "/{id}",
            get(staff::get_by_id)
                .put(staff::update)
                .delete(staff::delete),
        )
}

pub fn important_date_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(important_date::list).post(important_date::create))
        .route(
            "/{id}",
            get(important_date::get_by_id)
                .put(important_date::update)
                .delete(important_date::delete),
        )
}
