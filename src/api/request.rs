//! Request types for the Payslip Generation Engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEmployeeRequest {
    /// Display name for the new employee.
    pub username: String,
    /// Base monthly salary.
    pub monthly_salary: Decimal,
}

/// Request body for `POST /periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for `POST /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The weekday being attended.
    pub date: NaiveDate,
}

/// Request body for `POST /overtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked, within the policy cap.
    pub hours: u32,
}

/// Request body for `POST /reimbursements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    /// The claimed amount, strictly positive.
    pub amount: Decimal,
    /// Free-text description of the expense.
    pub description: String,
}

/// Request body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPayrollRequest {
    /// The attendance period to settle.
    pub period_id: Uuid,
}
