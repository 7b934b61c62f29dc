//! Activity records submitted by employees during an attendance period.
//!
//! Attendance, overtime and reimbursement rows are the raw inputs the
//! payroll engine aggregates. Uniqueness rules (one attendance or overtime
//! row per employee per day) are enforced at the submission surface, so by
//! the time records reach the engine they are already well-formed.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of recorded attendance for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee who attended.
    pub employee_id: Uuid,
    /// The calendar day attended. Weekends are rejected upstream.
    pub date: NaiveDate,
    /// When the record was submitted.
    pub created_at: DateTime<Utc>,
}

/// Overtime hours worked by an employee on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee who worked overtime.
    pub employee_id: Uuid,
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked, capped per day by policy.
    pub hours: u32,
    /// When the record was submitted.
    pub created_at: DateTime<Utc>,
}

/// A reimbursement claim submitted by an employee.
///
/// Claims carry no activity date of their own; period membership is decided
/// by the calendar date of `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementClaim {
    /// Unique identifier for the claim.
    pub id: Uuid,
    /// The employee claiming the amount.
    pub employee_id: Uuid,
    /// The claimed amount, strictly positive.
    pub amount: Decimal,
    /// Free-text description of the expense.
    pub description: String,
    /// When the claim was submitted.
    pub created_at: DateTime<Utc>,
}

impl ReimbursementClaim {
    /// The calendar date used to assign this claim to a period.
    pub fn claim_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
