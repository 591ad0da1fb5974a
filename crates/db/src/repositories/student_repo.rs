//! Repository for the `students` table.

use sqlx::PgPool;
use schoolhouse_core::search::like_pattern;
use schoolhouse_core::types::DbId;

use crate::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};

const COLUMNS: &str = "id, student_name, father_name, mother_name, date_of_birth, \
    mobile_number, email, registration_number, image_url, registration_datetime, \
    created_at, updated_at";

/// Provides CRUD and search operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student. `registration_datetime` defaults to now.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (student_name, father_name, mother_name, date_of_birth,
                 mobile_number, email, registration_number, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.student_name)
            .bind(&input.father_name)
            .bind(&input.mother_name)
            .bind(input.date_of_birth)
            .bind(&input.mobile_number)
            .bind(&input.email)
            .bind(&input.registration_number)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List students matching `filter`.
    ///
    /// The search term is matched case-insensitively against the student's
    /// name, registration number and mobile number.
    pub async fn list(pool: &PgPool, filter: &StudentFilter) -> Result<Vec<Student>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(like_pattern);
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE $1::TEXT IS NULL
                OR student_name ILIKE $1
                OR registration_number ILIKE $1
                OR mobile_number ILIKE $1
             ORDER BY {}
             LIMIT $2 OFFSET $3",
            filter.sort.order_by()
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(pattern)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                student_name = COALESCE($2, student_name),
                father_name = COALESCE($3, father_name),
                mother_name = COALESCE($4, mother_name),
                date_of_birth = COALESCE($5, date_of_birth),
                mobile_number = COALESCE($6, mobile_number),
                email = COALESCE($7, email),
                registration_number = COALESCE($8, registration_number),
                image_url = COALESCE($9, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.student_name)
            .bind(&input.father_name)
            .bind(&input.mother_name)
            .bind(input.date_of_birth)
            .bind(&input.mobile_number)
            .bind(&input.email)
            .bind(&input.registration_number)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a student. Their assignments and fees cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
