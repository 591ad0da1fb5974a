//! Academic session calendar math.
//!
//! A session spans from the first day of `(start_year, start_month)` to the
//! last day of `(end_year, end_month)`. Months are 1-based.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Abbreviated month names used in session labels.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Years a session may start or end in.
pub const SESSION_YEARS: RangeInclusive<i32> = 1900..=9999;

/// The month/year bounds of an academic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPeriod {
    pub start_year: i32,
    pub start_month: i32,
    pub end_year: i32,
    pub end_month: i32,
}

impl SessionPeriod {
    /// Last calendar day of the session, or `None` if the end month is invalid.
    pub fn last_day(&self) -> Option<NaiveDate> {
        last_day_of_month(self.end_year, self.end_month)
    }

    /// Human-readable label, e.g. `"Apr 2024 - Mar 2025"`.
    pub fn label(&self) -> String {
        format!(
            "{} {} - {} {}",
            month_abbreviation(self.start_month),
            self.start_year,
            month_abbreviation(self.end_month),
            self.end_year
        )
    }
}

fn month_abbreviation(month: i32) -> &'static str {
    usize::try_from(month - 1)
        .ok()
        .and_then(|idx| MONTH_ABBREVIATIONS.get(idx))
        .copied()
        .unwrap_or("???")
}

/// Last calendar day of `(year, month)`. Returns `None` for months outside `1..=12`.
pub fn last_day_of_month(year: i32, month: i32) -> Option<NaiveDate> {
    let month = u32::try_from(month).ok().filter(|m| (1..=12).contains(m))?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Whether a session has lapsed as of `today`.
///
/// True iff `today` is strictly after the session's last day. An absent
/// session, or one whose end month is not a real month, counts as past.
pub fn is_session_past(session: Option<&SessionPeriod>, today: NaiveDate) -> bool {
    match session.and_then(SessionPeriod::last_day) {
        Some(last_day) => today > last_day,
        None => true,
    }
}

/// Validate year and month ranges and that the session ends after it starts.
pub fn validate_session_range(period: &SessionPeriod) -> Result<(), CoreError> {
    for (name, year) in [("start_year", period.start_year), ("end_year", period.end_year)] {
        if !SESSION_YEARS.contains(&year) {
            return Err(CoreError::Validation(format!(
                "{name} must be between {} and {}, got {year}",
                SESSION_YEARS.start(),
                SESSION_YEARS.end()
            )));
        }
    }

    for (name, month) in [
        ("start_month", period.start_month),
        ("end_month", period.end_month),
    ] {
        if !(1..=12).contains(&month) {
            return Err(CoreError::Validation(format!(
                "{name} must be between 1 and 12, got {month}"
            )));
        }
    }

    let start = (period.start_year, period.start_month);
    let end = (period.end_year, period.end_month);
    if end <= start {
        return Err(CoreError::Validation(format!(
            "Session end ({} {}) must be after its start ({} {})",
            month_abbreviation(period.end_month),
            period.end_year,
            month_abbreviation(period.start_month),
            period.start_year
        )));
    }
    Ok(())
}
