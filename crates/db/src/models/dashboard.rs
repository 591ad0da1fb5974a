//! Admin dashboard counters.

use serde::Serialize;
use sqlx::FromRow;

/// Headline numbers for the admin landing page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub student_count: i64,
    pub class_count: i64,
    pub session_count: i64,
    pub staff_count: i64,
    pub published_notice_count: i64,
    /// Sum of positive `due_amount` across all fee records.
    pub outstanding_due: i64,
}
