//! Aggregate counters for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all dashboard counters in a single round trip.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM students) AS student_count,
                (SELECT COUNT(*) FROM classes) AS class_count,
                (SELECT COUNT(*) FROM sessions) AS session_count,
                (SELECT COUNT(*) FROM staff) AS staff_count,
                (SELECT COUNT(*) FROM notices WHERE is_published) AS published_notice_count,
                (SELECT COALESCE(SUM(due_amount), 0)::BIGINT FROM fees WHERE due_amount > 0)
                    AS outstanding_due",
        )
        .fetch_one(pool)
        .await
    }
}
