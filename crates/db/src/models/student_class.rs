//! Student-to-class assignment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::assignment::AssignmentSnapshot;
use schoolhouse_core::types::{DbId, Timestamp};

/// A row from the `student_classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentClass {
    pub id: DbId,
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: DbId,
    pub roll_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StudentClass {
    pub fn snapshot(&self) -> AssignmentSnapshot {
        AssignmentSnapshot {
            id: self.id,
            student_id: self.student_id,
            class_id: self.class_id,
            session_id: self.session_id,
            roll_number: self.roll_number.clone(),
        }
    }
}

/// An assignment joined with the student, class and session it references.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentClassDetail {
    pub id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub registration_number: String,
    pub class_id: DbId,
    pub class_number: String,
    pub class_code: String,
    pub session_id: DbId,
    pub start_year: i32,
    pub start_month: i32,
    pub end_year: i32,
    pub end_month: i32,
    pub roll_number: String,
    pub created_at: Timestamp,
}

/// DTO for assigning a student to a class in a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentClass {
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: DbId,
    pub roll_number: String,
}

/// DTO for editing an assignment. The student cannot be changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentClass {
    pub class_id: Option<DbId>,
    pub session_id: Option<DbId>,
    pub roll_number: Option<String>,
}

/// Equality filters for listing assignments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentClassFilter {
    pub student_id: Option<DbId>,
    pub class_id: Option<DbId>,
    pub session_id: Option<DbId>,
}
