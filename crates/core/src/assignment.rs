//! Student-to-class assignment consistency checks.
//!
//! An assignment links a student to a class within a session and carries a
//! roll number. Before any write the candidate is checked against a snapshot
//! of the class's current assignments. Checks run in a fixed order and the
//! first failure wins:
//!
//! 1. the roll number is six digits
//! 2. the roll number is unused in the class (any session)
//! 3. the student does not already hold this `(class, session)` pair
//! 4. the session exists and has not ended
//!
//! On update, the row being edited is excluded from checks 2 and 3, and
//! check 4 applies only when the assignment moves to a different session.

use chrono::NaiveDate;

use crate::roll_number::{suggest_next_roll_number, validate_roll_number};
use crate::session_period::{is_session_past, SessionPeriod};
use crate::types::DbId;

/// The identifying fields of a stored assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSnapshot {
    pub id: DbId,
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: DbId,
    pub roll_number: String,
}

/// The assignment about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCandidate {
    pub student_id: DbId,
    pub class_id: DbId,
    pub session_id: DbId,
    pub roll_number: String,
}

/// Whether the candidate is a new row or a replacement for an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentWrite {
    Create,
    Update {
        /// Row being replaced.
        id: DbId,
        /// Session the row was in before the edit.
        previous_session_id: DbId,
    },
}

impl AssignmentWrite {
    fn excludes(self, id: DbId) -> bool {
        matches!(self, Self::Update { id: own, .. } if own == id)
    }
}

/// Reasons an assignment write is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    #[error("Roll number '{0}' must be exactly 6 digits")]
    InvalidRollNumber(String),

    #[error("Roll number {roll_number} is already taken in this class. {}", suggestion_hint(.suggestion))]
    RollNumberTaken {
        roll_number: String,
        /// `None` when the class has no free roll numbers left.
        suggestion: Option<String>,
    },

    #[error("Student {student_id} is already assigned to class {class_id} in session {session_id}")]
    DuplicateAssignment {
        student_id: DbId,
        class_id: DbId,
        session_id: DbId,
    },

    #[error("Session {0} not found")]
    SessionNotFound(DbId),

    #[error("Session {label} has already ended; students cannot be assigned to it")]
    SessionPast { session_id: DbId, label: String },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(roll_number) => format!("Suggested roll number: {roll_number}"),
        None => "No free roll numbers remain".to_string(),
    }
}

/// Check a candidate against the class snapshot.
///
/// `class_assignments` should hold every stored assignment of the candidate's
/// class; rows for other classes are ignored. `session` is the candidate's
/// target session as loaded from storage (`None` if it does not exist).
pub fn check_assignment(
    candidate: &AssignmentCandidate,
    write: AssignmentWrite,
    class_assignments: &[AssignmentSnapshot],
    session: Option<&SessionPeriod>,
    today: NaiveDate,
) -> Result<(), AssignmentError> {
    if !validate_roll_number(&candidate.roll_number) {
        return Err(AssignmentError::InvalidRollNumber(
            candidate.roll_number.clone(),
        ));
    }

    let others = || {
        class_assignments
            .iter()
            .filter(|a| a.class_id == candidate.class_id && !write.excludes(a.id))
    };

    if others().any(|a| a.roll_number == candidate.roll_number) {
        return Err(AssignmentError::RollNumberTaken {
            roll_number: candidate.roll_number.clone(),
            suggestion: suggest_next_roll_number(class_assignments, candidate.class_id),
        });
    }

    if others().any(|a| {
        a.student_id == candidate.student_id && a.session_id == candidate.session_id
    }) {
        return Err(AssignmentError::DuplicateAssignment {
            student_id: candidate.student_id,
            class_id: candidate.class_id,
            session_id: candidate.session_id,
        });
    }

    let session_changed = match write {
        AssignmentWrite::Create => true,
        AssignmentWrite::Update {
            previous_session_id,
            ..
        } => previous_session_id != candidate.session_id,
    };
    if session_changed {
        let Some(period) = session else {
            return Err(AssignmentError::SessionNotFound(candidate.session_id));
        };
        if is_session_past(Some(period), today) {
            return Err(AssignmentError::SessionPast {
                session_id: candidate.session_id,
                label: period.label(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const CLASS: DbId = 10;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn current_session() -> SessionPeriod {
        SessionPeriod {
            start_year: 2026,
            start_month: 4,
            end_year: 2027,
            end_month: 3,
        }
    }

    fn lapsed_session() -> SessionPeriod {
        SessionPeriod {
            start_year: 2024,
            start_month: 4,
            end_year: 2025,
            end_month: 3,
        }
    }

    fn stored(id: DbId, student_id: DbId, session_id: DbId, roll: &str) -> AssignmentSnapshot {
        AssignmentSnapshot {
            id,
            student_id,
            class_id: CLASS,
            session_id,
            roll_number: roll.to_string(),
        }
    }

    fn candidate(student_id: DbId, session_id: DbId, roll: &str) -> AssignmentCandidate {
        AssignmentCandidate {
            student_id,
            class_id: CLASS,
            session_id,
            roll_number: roll.to_string(),
        }
    }

    #[test]
    fn fresh_assignment_passes() {
        let existing = vec![stored(1, 100, 1, "000001")];
        let result = check_assignment(
            &candidate(101, 1, "000002"),
            AssignmentWrite::Create,
            &existing,
            Some(&current_session()),
            today(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn malformed_roll_number_fails_first() {
        let result = check_assignment(
            &candidate(101, 1, "12345"),
            AssignmentWrite::Create,
            &[],
            None,
            today(),
        );
        assert_matches!(result, Err(AssignmentError::InvalidRollNumber(r)) if r == "12345");
    }

    #[test]
    fn taken_roll_number_surfaces_suggestion() {
        let existing = vec![stored(1, 100, 1, "000001"), stored(2, 102, 1, "000007")];
        let result = check_assignment(
            &candidate(101, 1, "000001"),
            AssignmentWrite::Create,
            &existing,
            Some(&current_session()),
            today(),
        );
        assert_eq!(
            result,
            Err(AssignmentError::RollNumberTaken {
                roll_number: "000001".to_string(),
                suggestion: Some("000008".to_string()),
            })
        );
    }

    #[test]
    fn roll_number_taken_message_covers_full_class() {
        let err = AssignmentError::RollNumberTaken {
            roll_number: "000001".to_string(),
            suggestion: Some("000002".to_string()),
        };
        assert!(err.to_string().ends_with("Suggested roll number: 000002"));

        let err = AssignmentError::RollNumberTaken {
            roll_number: "000001".to_string(),
            suggestion: None,
        };
        assert!(err.to_string().ends_with("No free roll numbers remain"));
    }

    #[test]
    fn roll_number_collision_spans_sessions() {
        let existing = vec![stored(1, 100, 1, "000003")];
        let result = check_assignment(
            &candidate(101, 2, "000003"),
            AssignmentWrite::Create,
            &existing,
            Some(&current_session()),
            today(),
        );
        assert_matches!(result, Err(AssignmentError::RollNumberTaken { .. }));
    }

    #[test]
    fn same_roll_number_in_another_class_is_fine() {
        let mut other = stored(1, 100, 1, "000003");
        other.class_id = CLASS + 1;
        let result = check_assignment(
            &candidate(101, 1, "000003"),
            AssignmentWrite::Create,
            &[other],
            Some(&current_session()),
            today(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn duplicate_class_session_pair_rejected() {
        let existing = vec![stored(1, 100, 1, "000001")];
        let result = check_assignment(
            &candidate(100, 1, "000002"),
            AssignmentWrite::Create,
            &existing,
            Some(&current_session()),
            today(),
        );
        assert_eq!(
            result,
            Err(AssignmentError::DuplicateAssignment {
                student_id: 100,
                class_id: CLASS,
                session_id: 1,
            })
        );
    }

    #[test]
    fn same_class_in_another_session_is_not_a_duplicate() {
        let existing = vec![stored(1, 100, 1, "000001")];
        let result = check_assignment(
            &candidate(100, 2, "000002"),
            AssignmentWrite::Create,
            &existing,
            Some(&current_session()),
            today(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn roll_conflict_wins_over_duplicate() {
        let existing = vec![stored(1, 100, 1, "000001")];
        let result = check_assignment(
            &candidate(100, 1, "000001"),
            AssignmentWrite::Create,
            &existing,
            Some(&current_session()),
            today(),
        );
        assert_matches!(result, Err(AssignmentError::RollNumberTaken { .. }));
    }

    #[test]
    fn past_session_rejected_on_create() {
        let result = check_assignment(
            &candidate(100, 1, "000001"),
            AssignmentWrite::Create,
            &[],
            Some(&lapsed_session()),
            today(),
        );
        assert_matches!(
            result,
            Err(AssignmentError::SessionPast { session_id: 1, ref label }) if label == "Apr 2024 - Mar 2025"
        );
    }

    #[test]
    fn missing_session_rejected_on_create() {
        let result = check_assignment(
            &candidate(100, 99, "000001"),
            AssignmentWrite::Create,
            &[],
            None,
            today(),
        );
        assert_eq!(result, Err(AssignmentError::SessionNotFound(99)));
    }

    #[test]
    fn update_may_keep_its_own_roll_number() {
        let existing = vec![stored(1, 100, 1, "000001"), stored(2, 101, 1, "000002")];
        let result = check_assignment(
            &candidate(100, 1, "000001"),
            AssignmentWrite::Update {
                id: 1,
                previous_session_id: 1,
            },
            &existing,
            Some(&current_session()),
            today(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn update_cannot_take_anothers_roll_number() {
        let existing = vec![stored(1, 100, 1, "000001"), stored(2, 101, 1, "000002")];
        let result = check_assignment(
            &candidate(100, 1, "000002"),
            AssignmentWrite::Update {
                id: 1,
                previous_session_id: 1,
            },
            &existing,
            Some(&current_session()),
            today(),
        );
        assert_matches!(result, Err(AssignmentError::RollNumberTaken { suggestion, .. }) if suggestion.as_deref() == Some("000003"));
    }

    #[test]
    fn update_within_lapsed_session_is_allowed() {
        let existing = vec![stored(1, 100, 1, "000001")];
        let result = check_assignment(
            &candidate(100, 1, "000005"),
            AssignmentWrite::Update {
                id: 1,
                previous_session_id: 1,
            },
            &existing,
            Some(&lapsed_session()),
            today(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn update_moving_into_lapsed_session_is_rejected() {
        let existing = vec![stored(1, 100, 1, "000001")];
        let result = check_assignment(
            &candidate(100, 2, "000001"),
            AssignmentWrite::Update {
                id: 1,
                previous_session_id: 1,
            },
            &existing,
            Some(&lapsed_session()),
            today(),
        );
        assert_matches!(result, Err(AssignmentError::SessionPast { session_id: 2, .. }));
    }
}
