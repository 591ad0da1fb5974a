//! Classes and sessions: CRUD, validation and restricted deletes.

mod common;

use axum::http::StatusCode;
use common::{admin_delete, admin_get, admin_post, admin_put, body_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_class_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = admin_post(
        app,
        "/api/v1/admin/classes",
        json!({"class_number": "Class 5", "class_code": "B205"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["class_code"], "B205");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_class_code_is_rejected(pool: PgPool) {
    for code in ["AB101", "A10", "a101"] {
        let app = common::build_test_app(pool.clone());
        let response = admin_post(
            app,
            "/api/v1/admin/classes",
            json!({"class_number": "Class 1", "class_code": code}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{code}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_class_code_is_409(pool: PgPool) {
    common::seed_class(&pool, "A101").await;

    let app = common::build_test_app(pool);
    let response = admin_post(
        app,
        "/api/v1/admin/classes",
        json!({"class_number": "Another", "class_code": "A101"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_class_keeps_unset_fields(pool: PgPool) {
    let class = common::seed_class(&pool, "A101").await;

    let app = common::build_test_app(pool);
    let response = admin_put(
        app,
        &format!("/api/v1/admin/classes/{}", class.id),
        json!({"class_number": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["class_number"], "Renamed");
    assert_eq!(json["data"]["class_code"], "A101");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_referenced_class_is_409(pool: PgPool) {
    let class = common::seed_class(&pool, "A101").await;
    let session = common::seed_open_session(&pool).await;
    let student = common::seed_student(&pool, "Asha", "REG-1").await;

    let app = common::build_test_app(pool.clone());
    let response = admin_post(
        app,
        "/api/v1/admin/assignments",
        json!({
            "student_id": student.id,
            "class_id": class.id,
            "session_id": session.id,
            "roll_number": "000001",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = admin_delete(app, &format!("/api/v1/admin/classes/{}", class.id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Still there.
    let app = common::build_test_app(pool);
    let response = admin_get(app, &format!("/api/v1/admin/classes/{}", class.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unreferenced_class(pool: PgPool) {
    let class = common::seed_class(&pool, "A101").await;

    let app = common::build_test_app(pool.clone());
    let response = admin_delete(app, &format!("/api/v1/admin/classes/{}", class.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = admin_get(app, &format!("/api/v1/admin/classes/{}", class.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn next_roll_number_for_empty_class(pool: PgPool) {
    let class = common::seed_class(&pool, "A101").await;

    let app = common::build_test_app(pool);
    let response = admin_get(
        app,
        &format!("/api/v1/admin/classes/{}/next-roll-number", class.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["suggested_roll_number"], "000001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn next_roll_number_for_missing_class_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = admin_get(app, "/api/v1/admin/classes/424242/next-roll-number").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sessions_list_with_label_and_past_flag(pool: PgPool) {
    common::seed_lapsed_session(&pool).await;
    common::seed_open_session(&pool).await;

    let app = common::build_test_app(pool);
    let response = admin_get(app, "/api/v1/admin/sessions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sessions = json["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);

    // Most recent first.
    assert_eq!(sessions[0]["label"], "Apr 2090 - Mar 2091");
    assert_eq!(sessions[0]["is_past"], false);
    assert_eq!(sessions[1]["label"], "Apr 2001 - Mar 2002");
    assert_eq!(sessions[1]["is_past"], true);
    assert!(sessions[1]["start_year"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn backwards_session_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = admin_post(
        app,
        "/api/v1/admin/sessions",
        json!({"start_year": 2026, "start_month": 4, "end_year": 2025, "end_month": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_years_out_of_range_are_rejected(pool: PgPool) {
    for body in [
        json!({"start_year": 2026, "start_month": 4, "end_year": 300000, "end_month": 3}),
        json!({"start_year": -5, "start_month": 4, "end_year": -4, "end_month": 3}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = admin_post(app, "/api/v1/admin/sessions", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    // Nothing was stored.
    let app = common::build_test_app(pool.clone());
    let json = body_json(admin_get(app, "/api/v1/admin/sessions").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // An update cannot push an existing session out of range either.
    let session = common::seed_open_session(&pool).await;
    let app = common::build_test_app(pool);
    let response = admin_put(
        app,
        &format!("/api/v1/admin/sessions/{}", session.id),
        json!({"end_year": 300000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_update_merges_and_revalidates(pool: PgPool) {
    let session = common::seed_open_session(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = admin_put(
        app,
        &format!("/api/v1/admin/sessions/{}", session.id),
        json!({"end_month": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["label"], "Apr 2090 - May 2091");

    // Moving the end before the start fails.
    let app = common::build_test_app(pool);
    let response = admin_put(
        app,
        &format!("/api/v1/admin/sessions/{}", session.id),
        json!({"end_year": 2089}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_referenced_session_is_409(pool: PgPool) {
    let class = common::seed_class(&pool, "A101").await;
    let session = common::seed_open_session(&pool).await;
    let student = common::seed_student(&pool, "Asha", "REG-1").await;

    let app = common::build_test_app(pool.clone());
    admin_post(
        app,
        "/api/v1/admin/assignments",
        json!({
            "student_id": student.id,
            "class_id": class.id,
            "session_id": session.id,
            "roll_number": "000001",
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = admin_delete(app, &format!("/api/v1/admin/sessions/{}", session.id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
