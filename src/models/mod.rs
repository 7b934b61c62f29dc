//! Core data models for the Payslip Generation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod activity;
mod context;
mod employee;
mod payslip;
mod period;

pub use activity::{AttendanceRecord, OvertimeRecord, ReimbursementClaim};
pub use context::{RequestContext, Role};
pub use employee::Employee;
pub use payslip::{
    AuditAction, AuditLogEntry, EmployeeSummary, PayrollRun, Payslip, PayslipSummary,
};
pub use period::AttendancePeriod;
