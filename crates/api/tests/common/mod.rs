#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use schoolhouse_api::auth::jwt::{Claims, JwtConfig};
use schoolhouse_api::config::{LogFormat, ServerConfig};
use schoolhouse_api::router::build_app_router;
use schoolhouse_api::state::AppState;
use schoolhouse_db::models::classroom::{ClassRoom, CreateClassRoom};
use schoolhouse_db::models::session::{AcademicSession, CreateSession};
use schoolhouse_db::models::student::{CreateStudent, Student};
use schoolhouse_db::repositories::{ClassRoomRepo, SessionRepo, StudentRepo};

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_with(role: &str, expires_in_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "idp-user-1".to_string(),
        role: role.to_string(),
        exp: now + expires_in_secs,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encoding should succeed")
}

pub fn admin_token() -> String {
    token_with("admin", 900)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn admin_get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, Some(&admin_token())).await
}

pub async fn admin_post(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), Some(&admin_token())).await
}

pub async fn admin_put(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(&admin_token())).await
}

pub async fn admin_delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, Some(&admin_token())).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_class(pool: &PgPool, code: &str) -> ClassRoom {
    ClassRoomRepo::create(
        pool,
        &CreateClassRoom {
            class_number: format!("Class {code}"),
            class_code: code.to_string(),
        },
    )
    .await
    .expect("class creation should succeed")
}

pub async fn seed_session(pool: &PgPool, start_year: i32) -> AcademicSession {
    SessionRepo::create(
        pool,
        &CreateSession {
            start_year,
            start_month: 4,
            end_year: start_year + 1,
            end_month: 3,
        },
    )
    .await
    .expect("session creation should succeed")
}

/// A session that will not lapse for decades.
pub async fn seed_open_session(pool: &PgPool) -> AcademicSession {
    seed_session(pool, 2090).await
}

/// A session that ended long ago.
pub async fn seed_lapsed_session(pool: &PgPool) -> AcademicSession {
    seed_session(pool, 2001).await
}

pub async fn seed_student(pool: &PgPool, name: &str, registration_number: &str) -> Student {
    StudentRepo::create(
        pool,
        &CreateStudent {
            student_name: name.to_string(),
            father_name: format!("{name} Sr."),
            mother_name: format!("Mother of {name}"),
            date_of_birth: NaiveDate::from_ymd_opt(2012, 6, 15).unwrap(),
            mobile_number: "9876543210".to_string(),
            email: format!("{registration_number}@example.com").to_lowercase(),
            registration_number: registration_number.to_string(),
            image_url: None,
        },
    )
    .await
    .expect("student creation should succeed")
}
