//! Payroll run, payslip and audit models.
//!
//! These are the rows a single payroll execution produces. All three are
//! write-once: a run is never re-executed, a payslip is never recomputed,
//! and the audit log is append-only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One execution of the payroll engine against one attendance period.
///
/// At most one run exists per period; the storage layer enforces this
/// atomically at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for the run.
    pub id: Uuid,
    /// The attendance period this run settled.
    pub period_id: Uuid,
    /// The administrator who triggered the run.
    pub initiated_by: Uuid,
    /// Source IP of the triggering request.
    pub source_ip: String,
    /// When the run was created.
    pub created_at: DateTime<Utc>,
}

/// The computed pay breakdown for one employee within one payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for the payslip.
    pub id: Uuid,
    /// The payroll run this payslip belongs to.
    pub run_id: Uuid,
    /// The employee being paid.
    pub employee_id: Uuid,
    /// The employee's monthly salary at run time.
    pub base_salary: Decimal,
    /// Attendance days counted inside the period.
    pub attendance_days: u32,
    /// Base salary scaled by attended working days.
    pub prorated_salary: Decimal,
    /// Overtime hours summed inside the period.
    pub overtime_hours: u32,
    /// Pay owed for overtime hours.
    pub overtime_pay: Decimal,
    /// Sum of reimbursement claims inside the period.
    pub reimbursement_total: Decimal,
    /// Prorated salary + overtime pay + reimbursements.
    pub take_home_pay: Decimal,
}

/// The action recorded by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// A row was created.
    Create,
}

/// An append-only audit trail entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The record the action applied to.
    pub record_id: Uuid,
    /// The recorded action.
    pub action: AuditAction,
    /// The caller who performed the action.
    pub performed_by: Uuid,
    /// Source IP of the triggering request.
    pub source_ip: String,
    /// Correlation identifier of the triggering request.
    pub request_id: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

/// One employee's line in a payslip summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee being summarised.
    pub employee_id: Uuid,
    /// The employee's display name.
    pub username: String,
    /// The employee's take-home pay for the run.
    pub take_home_pay: Decimal,
}

/// Per-employee take-home pays for a run plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipSummary {
    /// One line per payslip under the run.
    pub employee_summaries: Vec<EmployeeSummary>,
    /// Sum of all take-home pays.
    pub total_take_home: Decimal,
}
