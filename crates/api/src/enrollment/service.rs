//! Student-to-class assignment writes.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use schoolhouse_core::assignment::{
    check_assignment, AssignmentCandidate, AssignmentError, AssignmentSnapshot, AssignmentWrite,
};
use schoolhouse_core::error::CoreError;
use schoolhouse_core::roll_number::{suggest_next_roll_number, validate_roll_number};
use schoolhouse_core::types::DbId;
use schoolhouse_db::models::student_class::{
    CreateStudentClass, StudentClass, UpdateStudentClass,
};
use schoolhouse_db::repositories::{ClassRoomRepo, SessionRepo, StudentClassRepo, StudentRepo};

use crate::error::{AppError, AppResult};

const CLASS_ROLL_CONSTRAINT: &str = "uq_student_classes_class_roll";
const STUDENT_CLASS_SESSION_CONSTRAINT: &str = "uq_student_classes_student_class_session";

/// Validates and writes class assignments.
///
/// The checks are read-then-write. Two concurrent writes can both pass them;
/// the loser then trips a unique constraint, which is translated back into
/// the matching [`AssignmentError`].
pub struct AssignmentService {
    pool: PgPool,
}

impl AssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Assign a student to a class in a session.
    pub async fn assign(&self, input: &CreateStudentClass) -> AppResult<StudentClass> {
        if !validate_roll_number(&input.roll_number) {
            return Err(AssignmentError::InvalidRollNumber(input.roll_number.clone()).into());
        }
        self.ensure_student(input.student_id).await?;
        self.ensure_class(input.class_id).await?;

        let candidate = AssignmentCandidate {
            student_id: input.student_id,
            class_id: input.class_id,
            session_id: input.session_id,
            roll_number: input.roll_number.clone(),
        };
        self.check(&candidate, AssignmentWrite::Create).await?;

        let created = match StudentClassRepo::create(&self.pool, input).await {
            Ok(row) => row,
            Err(err) => return Err(self.translate_race(err, &candidate).await),
        };

        tracing::info!(
            assignment_id = created.id,
            student_id = created.student_id,
            class_id = created.class_id,
            session_id = created.session_id,
            roll_number = %created.roll_number,
            "Student assigned to class"
        );
        Ok(created)
    }

    /// Apply a partial edit to an assignment.
    ///
    /// The session-lapsed check only runs when the assignment moves to a
    /// different session.
    pub async fn update(&self, id: DbId, input: &UpdateStudentClass) -> AppResult<StudentClass> {
        let current = StudentClassRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Assignment",
                id,
            }))?;

        let candidate = AssignmentCandidate {
            student_id: current.student_id,
            class_id: input.class_id.unwrap_or(current.class_id),
            session_id: input.session_id.unwrap_or(current.session_id),
            roll_number: input
                .roll_number
                .clone()
                .unwrap_or_else(|| current.roll_number.clone()),
        };
        if !validate_roll_number(&candidate.roll_number) {
            return Err(AssignmentError::InvalidRollNumber(candidate.roll_number).into());
        }
        if candidate.class_id != current.class_id {
            self.ensure_class(candidate.class_id).await?;
        }

        let write = AssignmentWrite::Update {
            id,
            previous_session_id: current.session_id,
        };
        self.check(&candidate, write).await?;

        let updated = match StudentClassRepo::update(
            &self.pool,
            id,
            candidate.class_id,
            candidate.session_id,
            &candidate.roll_number,
        )
        .await
        {
            Ok(Some(row)) => row,
            Ok(None) => {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Assignment",
                    id,
                }))
            }
            Err(err) => return Err(self.translate_race(err, &candidate).await),
        };

        tracing::info!(
            assignment_id = id,
            class_id = updated.class_id,
            session_id = updated.session_id,
            roll_number = %updated.roll_number,
            "Assignment updated"
        );
        Ok(updated)
    }

    /// Remove an assignment. Fee records are not touched.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !StudentClassRepo::delete(&self.pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Assignment",
                id,
            }));
        }
        tracing::info!(assignment_id = id, "Assignment deleted");
        Ok(())
    }

    /// The roll number the next student in `class_id` should receive.
    ///
    /// A class with every roll number in use is a conflict.
    pub async fn suggest_roll_number(&self, class_id: DbId) -> AppResult<String> {
        self.ensure_class(class_id).await?;
        let snapshots = self.class_snapshots(class_id).await?;
        suggest_next_roll_number(&snapshots, class_id).ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Class {class_id} has no free roll numbers"
            )))
        })
    }

    async fn check(
        &self,
        candidate: &AssignmentCandidate,
        write: AssignmentWrite,
    ) -> AppResult<()> {
        let snapshots = self.class_snapshots(candidate.class_id).await?;
        let session = SessionRepo::find_by_id(&self.pool, candidate.session_id)
            .await?
            .map(|s| s.period());

        check_assignment(candidate, write, &snapshots, session.as_ref(), today()).map_err(|e| {
            tracing::debug!(error = %e, class_id = candidate.class_id, "Assignment refused");
            AppError::from(e)
        })
    }

    async fn class_snapshots(&self, class_id: DbId) -> AppResult<Vec<AssignmentSnapshot>> {
        let rows = StudentClassRepo::list_by_class(&self.pool, class_id).await?;
        Ok(rows.iter().map(StudentClass::snapshot).collect())
    }

    async fn ensure_student(&self, id: DbId) -> AppResult<()> {
        StudentRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Student",
                id,
            }))?;
        Ok(())
    }

    async fn ensure_class(&self, id: DbId) -> AppResult<()> {
        ClassRoomRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Class", id }))?;
        Ok(())
    }

    /// Map a unique violation from a lost race back to the domain error.
    async fn translate_race(&self, err: sqlx::Error, candidate: &AssignmentCandidate) -> AppError {
        let constraint = match &err {
            sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_owned),
            _ => None,
        };
        match constraint.as_deref() {
            Some(CLASS_ROLL_CONSTRAINT) => {
                tracing::warn!(
                    class_id = candidate.class_id,
                    roll_number = %candidate.roll_number,
                    "Roll number claimed concurrently"
                );
                let suggestion = match self.class_snapshots(candidate.class_id).await {
                    Ok(snapshots) => suggest_next_roll_number(&snapshots, candidate.class_id),
                    Err(e) => return e,
                };
                AssignmentError::RollNumberTaken {
                    roll_number: candidate.roll_number.clone(),
                    suggestion,
                }
                .into()
            }
            Some(STUDENT_CLASS_SESSION_CONSTRAINT) => AssignmentError::DuplicateAssignment {
                student_id: candidate.student_id,
                class_id: candidate.class_id,
                session_id: candidate.session_id,
            }
            .into(),
            _ => AppError::Database(err),
        }
    }
}

/// The calendar date used for session-lapse checks.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
