use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use schoolhouse_core::assignment::AssignmentError;
use schoolhouse_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`AssignmentError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `schoolhouse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A refused class assignment write.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    /// DTO field validation failures.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Roll-number conflicts carry the suggestion as an extra body field.
        if let AppError::Assignment(AssignmentError::RollNumberTaken { suggestion, .. }) = &self {
            let body = json!({
                "error": self.to_string(),
                "code": "ROLL_NUMBER_TAKEN",
                "suggested_roll_number": suggestion,
            });
            return (StatusCode::CONFLICT, axum::Json(body)).into_response();
        }

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Assignment consistency errors ---
            AppError::Assignment(err) => classify_assignment_error(err),

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors.to_string(),
            ),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_assignment_error(err: &AssignmentError) -> (StatusCode, &'static str, String) {
    let (status, code) = match err {
        AssignmentError::InvalidRollNumber(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        AssignmentError::RollNumberTaken { .. } => (StatusCode::CONFLICT, "ROLL_NUMBER_TAKEN"),
        AssignmentError::DuplicateAssignment { .. } => {
            (StatusCode::CONFLICT, "DUPLICATE_ASSIGNMENT")
        }
        AssignmentError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        AssignmentError::SessionPast { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "SESSION_PAST"),
    };
    (status, code, err.to_string())
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 409 when a referenced row is still in use
///   and 404 when a referenced row does not exist.
/// - Check constraint violations map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // unique_violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // foreign_key_violation
                Some("23503") => {
                    return if db_err.message().starts_with("update or delete") {
                        (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            "Record is still referenced by other records".to_string(),
                        )
                    } else {
                        (
                            StatusCode::NOT_FOUND,
                            "NOT_FOUND",
                            format!("Referenced record does not exist ({constraint})"),
                        )
                    };
                }
                // check_violation
                Some("23514") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Value violates check constraint: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn roll_number_conflict_includes_suggestion() {
        let (status, json) = body_of(AppError::Assignment(AssignmentError::RollNumberTaken {
            roll_number: "000001".into(),
            suggestion: Some("000004".into()),
        }))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["code"], "ROLL_NUMBER_TAKEN");
        assert_eq!(json["suggested_roll_number"], "000004");
    }

    #[tokio::test]
    async fn full_class_conflict_has_null_suggestion() {
        let (status, json) = body_of(AppError::Assignment(AssignmentError::RollNumberTaken {
            roll_number: "000001".into(),
            suggestion: None,
        }))
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["code"], "ROLL_NUMBER_TAKEN");
        assert!(json["suggested_roll_number"].is_null());
    }

    #[tokio::test]
    async fn past_session_is_unprocessable() {
        let (status, json) = body_of(AppError::Assignment(AssignmentError::SessionPast {
            session_id: 3,
            label: "Apr 2024 - Mar 2025".into(),
        }))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "SESSION_PAST");
    }

    #[tokio::test]
    async fn not_found_names_the_entity() {
        let (status, json) = body_of(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: 7,
        }))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Student with id 7 not found");
    }

    #[tokio::test]
    async fn internal_errors_are_sanitized() {
        let (status, json) = body_of(AppError::InternalError("pool exhausted".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "An internal error occurred");
    }
}
