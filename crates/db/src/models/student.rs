//! Student entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::student::StudentSort;
use schoolhouse_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub student_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    pub mobile_number: String,
    pub email: String,
    pub registration_number: String,
    pub image_url: Option<String>,
    pub registration_datetime: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for admitting a new student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "student_name must not be empty"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "father_name must not be empty"))]
    pub father_name: String,
    #[validate(length(min = 1, message = "mother_name must not be empty"))]
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    pub mobile_number: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "registration_number must not be empty"))]
    pub registration_number: String,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

/// DTO for updating an existing student. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, message = "student_name must not be empty"))]
    pub student_name: Option<String>,
    #[validate(length(min = 1, message = "father_name must not be empty"))]
    pub father_name: Option<String>,
    #[validate(length(min = 1, message = "mother_name must not be empty"))]
    pub mother_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub mobile_number: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "registration_number must not be empty"))]
    pub registration_number: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Search, ordering and paging for the student list.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Case-insensitive match against name, registration number or mobile.
    pub search: Option<String>,
    pub sort: StudentSort,
    pub limit: i64,
    pub offset: i64,
}
