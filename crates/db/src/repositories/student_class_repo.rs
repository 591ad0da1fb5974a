//! Repository for the `student_classes` table (class assignments).
//!
//! Consistency rules are not enforced here; callers go through the
//! assignment service, with the unique constraints as a backstop.

use sqlx::PgPool;
use schoolhouse_core::types::DbId;

use crate::models::student_class::{
    CreateStudentClass, StudentClass, StudentClassDetail, StudentClassFilter,
};

const COLUMNS: &str = "id, student_id, class_id, session_id, roll_number, created_at, updated_at";

/// Joined projection used by the admin list view.
const DETAIL_SELECT: &str = "SELECT sc.id, sc.student_id, st.student_name, st.registration_number,
            sc.class_id, c.class_number, c.class_code,
            sc.session_id, se.start_year, se.start_month, se.end_year, se.end_month,
            sc.roll_number, sc.created_at
     FROM student_classes sc
     JOIN students st ON st.id = sc.student_id
     JOIN classes c ON c.id = sc.class_id
     JOIN sessions se ON se.id = sc.session_id";

/// Provides CRUD operations for class assignments.
pub struct StudentClassRepo;

impl StudentClassRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudentClass,
    ) -> Result<StudentClass, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_classes (student_id, class_id, session_id, roll_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentClass>(&query)
            .bind(input.student_id)
            .bind(input.class_id)
            .bind(input.session_id)
            .bind(&input.roll_number)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudentClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_classes WHERE id = $1");
        sqlx::query_as::<_, StudentClass>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one assignment with its joined names.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudentClassDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE sc.id = $1");
        sqlx::query_as::<_, StudentClassDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every assignment in a class, across all sessions.
    pub async fn list_by_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<StudentClass>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_classes WHERE class_id = $1 ORDER BY roll_number ASC"
        );
        sqlx::query_as::<_, StudentClass>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// The student's assignment for a given class and session, if any.
    pub async fn find_for_student(
        pool: &PgPool,
        student_id: DbId,
        class_id: DbId,
        session_id: DbId,
    ) -> Result<Option<StudentClass>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_classes
             WHERE student_id = $1 AND class_id = $2 AND session_id = $3"
        );
        sqlx::query_as::<_, StudentClass>(&query)
            .bind(student_id)
            .bind(class_id)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// List assignments joined with student, class and session, applying
    /// whichever equality filters are set.
    pub async fn list_detailed(
        pool: &PgPool,
        filter: &StudentClassFilter,
    ) -> Result<Vec<StudentClassDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::BIGINT IS NULL OR sc.student_id = $1)
               AND ($2::BIGINT IS NULL OR sc.class_id = $2)
               AND ($3::BIGINT IS NULL OR sc.session_id = $3)
             ORDER BY c.class_code ASC, sc.roll_number ASC"
        );
        sqlx::query_as::<_, StudentClassDetail>(&query)
            .bind(filter.student_id)
            .bind(filter.class_id)
            .bind(filter.session_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable fields of an assignment with merged, checked values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        class_id: DbId,
        session_id: DbId,
        roll_number: &str,
    ) -> Result<Option<StudentClass>, sqlx::Error> {
        let query = format!(
            "UPDATE student_classes SET
                class_id = $2,
                session_id = $3,
                roll_number = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentClass>(&query)
            .bind(id)
            .bind(class_id)
            .bind(session_id)
            .bind(roll_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment. Fee rows are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM student_classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
