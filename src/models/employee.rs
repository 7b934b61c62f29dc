//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// An employee known to the payroll system.
///
/// The monthly salary recorded here is the base salary snapshotted into
/// payslips at run time; proration never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// Display name used in payslip summaries.
    pub username: String,
    /// Base monthly salary.
    pub monthly_salary: Decimal,
    /// The caller role this account carries.
    pub role: Role,
}
