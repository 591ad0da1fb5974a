//! Academic session model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use schoolhouse_core::session_period::{is_session_past, SessionPeriod};
use schoolhouse_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AcademicSession {
    pub id: DbId,
    pub start_year: i32,
    pub start_month: i32,
    pub end_year: i32,
    pub end_month: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AcademicSession {
    pub fn period(&self) -> SessionPeriod {
        SessionPeriod {
            start_year: self.start_year,
            start_month: self.start_month,
            end_year: self.end_year,
            end_month: self.end_month,
        }
    }
}

/// A session with its display label and lapsed flag, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    #[serde(flatten)]
    pub session: AcademicSession,
    pub label: String,
    pub is_past: bool,
}

impl SessionSummary {
    pub fn new(session: AcademicSession, today: NaiveDate) -> Self {
        let period = session.period();
        Self {
            label: period.label(),
            is_past: is_session_past(Some(&period), today),
            session,
        }
    }
}

/// DTO for creating a new session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSession {
    pub start_year: i32,
    pub start_month: i32,
    pub end_year: i32,
    pub end_month: i32,
}

impl CreateSession {
    pub fn period(&self) -> SessionPeriod {
        SessionPeriod {
            start_year: self.start_year,
            start_month: self.start_month,
            end_year: self.end_year,
            end_month: self.end_month,
        }
    }
}

/// DTO for updating an existing session. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSession {
    pub start_year: Option<i32>,
    pub start_month: Option<i32>,
    pub end_year: Option<i32>,
    pub end_month: Option<i32>,
}

impl UpdateSession {
    /// The period that results from applying this patch to `current`.
    pub fn merged_period(&self, current: &AcademicSession) -> SessionPeriod {
        SessionPeriod {
            start_year: self.start_year.unwrap_or(current.start_year),
            start_month: self.start_month.unwrap_or(current.start_month),
            end_year: self.end_year.unwrap_or(current.end_year),
            end_month: self.end_month.unwrap_or(current.end_month),
        }
    }
}
