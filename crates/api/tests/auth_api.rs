//! Bearer-token enforcement on admin routes.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send, token_with};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_route_without_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/classes").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_authorization_header_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = axum::http::Request::builder()
        .uri("/api/v1/admin/students")
        .header("authorization", "Token abc")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = token_with("admin", -600);
    let response = send(app, Method::GET, "/api/v1/admin/dashboard", None, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_admin_role_is_403(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = token_with("teacher", 900);
    let response = send(app, Method::GET, "/api/v1/admin/dashboard", None, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_routes_need_no_token(pool: PgPool) {
    for uri in [
        "/api/v1/notices",
        "/api/v1/gallery",
        "/api/v1/staff",
        "/api/v1/important-dates",
        "/api/v1/fee-structure",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_dashboard_counts(pool: PgPool) {
    common::seed_class(&pool, "A101").await;
    common::seed_student(&pool, "Asha", "REG-1").await;

    let app = common::build_test_app(pool);
    let response = common::admin_get(app, "/api/v1/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["student_count"], 1);
    assert_eq!(json["data"]["class_count"], 1);
    assert_eq!(json["data"]["outstanding_due"], 0);
}
