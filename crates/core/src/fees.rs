//! Fee record rules and per-student aggregation.
//!
//! Each fee record carries an admin-set `status`. The aggregate computed here
//! is derived independently from the summed amounts and may disagree with the
//! individual record statuses.

use serde::Serialize;

use crate::error::CoreError;

/// Nothing has been paid against the record.
pub const FEE_STATUS_PENDING: &str = "pending";

/// Some, but not all, of the amount has been paid.
pub const FEE_STATUS_PARTIAL: &str = "partial";

/// The record is settled.
pub const FEE_STATUS_PAID: &str = "paid";

/// The record is past its due month and unpaid.
pub const FEE_STATUS_OVERDUE: &str = "overdue";

/// All statuses an admin may set on a fee record.
pub const VALID_FEE_STATUSES: &[&str] = &[
    FEE_STATUS_PENDING,
    FEE_STATUS_PARTIAL,
    FEE_STATUS_PAID,
    FEE_STATUS_OVERDUE,
];

/// Aggregate status of a student's fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateFeeStatus {
    Paid,
    Partial,
    Pending,
    NoFees,
}

impl AggregateFeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Pending => "pending",
            Self::NoFees => "no_fees",
        }
    }
}

/// The amounts of a single fee record that feed the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeLine {
    pub amount: i64,
    pub paid_amount: i64,
}

/// Totals across a set of fee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeAggregate {
    pub total_fees: i64,
    pub total_paid: i64,
    pub total_due: i64,
    pub status: AggregateFeeStatus,
}

/// Sum fee lines and derive the aggregate status.
///
/// Status, in priority order: no records → `no_fees`; nothing due → `paid`;
/// something due and something paid → `partial`; otherwise `pending`.
pub fn compute_fee_aggregate<I>(records: I) -> FeeAggregate
where
    I: IntoIterator<Item = FeeLine>,
{
    let mut count = 0usize;
    let mut total_fees = 0i64;
    let mut total_paid = 0i64;

    for line in records {
        count += 1;
        total_fees = total_fees.saturating_add(line.amount);
        total_paid = total_paid.saturating_add(line.paid_amount);
    }

    let total_due = total_fees.saturating_sub(total_paid);
    let status = if count == 0 {
        AggregateFeeStatus::NoFees
    } else if total_due <= 0 {
        AggregateFeeStatus::Paid
    } else if total_paid > 0 {
        AggregateFeeStatus::Partial
    } else {
        AggregateFeeStatus::Pending
    };

    FeeAggregate {
        total_fees,
        total_paid,
        total_due,
        status,
    }
}

/// Validate that a status string is one of [`VALID_FEE_STATUSES`].
pub fn validate_fee_status(status: &str) -> Result<(), CoreError> {
    if VALID_FEE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid fee status '{status}'. Must be one of: {}",
            VALID_FEE_STATUSES.join(", ")
        )))
    }
}

/// Amounts are whole currency units and may not be negative.
pub fn validate_fee_amounts(amount: Option<i64>, paid_amount: Option<i64>) -> Result<(), CoreError> {
    for (name, value) in [("amount", amount), ("paid_amount", paid_amount)] {
        if let Some(v) = value {
            if v < 0 {
                return Err(CoreError::Validation(format!(
                    "{name} must not be negative, got {v}"
                )));
            }
        }
    }
    Ok(())
}

/// Validate a 1-based billing month.
pub fn validate_fee_month(month: i32) -> Result<(), CoreError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )))
    }
}
