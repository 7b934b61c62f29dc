//! Aggregation of raw activity records into per-employee totals.
//!
//! Aggregation is a pure function of the loaded record sets: it never reads
//! or writes storage.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{AttendanceRecord, OvertimeRecord, ReimbursementClaim};

/// Per-employee activity totals for one attendance period.
///
/// An employee appears in the totals when they have *any* qualifying
/// activity: attendance, overtime, or a reimbursement claim. An employee
/// with a single claim and no attendance still gets paid for that claim.
#[derive(Debug, Clone, Default)]
pub struct ActivityTotals {
    attendance_days: HashMap<Uuid, u32>,
    overtime_hours: HashMap<Uuid, u32>,
    reimbursement_totals: HashMap<Uuid, Decimal>,
}

impl ActivityTotals {
    /// Attendance days counted for an employee, zero when absent.
    pub fn attendance_days(&self, employee_id: Uuid) -> u32 {
        self.attendance_days.get(&employee_id).copied().unwrap_or(0)
    }

    /// Overtime hours summed for an employee, zero when absent.
    pub fn overtime_hours(&self, employee_id: Uuid) -> u32 {
        self.overtime_hours.get(&employee_id).copied().unwrap_or(0)
    }

    /// Reimbursement total summed for an employee, zero when absent.
    pub fn reimbursement_total(&self, employee_id: Uuid) -> Decimal {
        self.reimbursement_totals
            .get(&employee_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// The union of employees present in any of the three maps.
    ///
    /// Sorted so payslip creation iterates deterministically.
    pub fn employee_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self
            .attendance_days
            .keys()
            .chain(self.overtime_hours.keys())
            .chain(self.reimbursement_totals.keys())
            .copied()
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Returns true when no employee had any activity.
    pub fn is_empty(&self) -> bool {
        self.attendance_days.is_empty()
            && self.overtime_hours.is_empty()
            && self.reimbursement_totals.is_empty()
    }
}

/// Aggregates raw activity records into per-employee totals.
///
/// Attendance rows are counted, overtime hours and reimbursement amounts
/// are summed. The caller is responsible for having filtered the records to
/// the period's date range.
///
/// # Example
///
/// ```
/// use payslip_engine::engine::aggregate_activity;
///
/// let totals = aggregate_activity(&[], &[], &[]);
/// assert!(totals.is_empty());
/// ```
pub fn aggregate_activity(
    attendance: &[AttendanceRecord],
    overtime: &[OvertimeRecord],
    reimbursements: &[ReimbursementClaim],
) -> ActivityTotals {
    let mut totals = ActivityTotals::default();

    for record in attendance {
        *totals.attendance_days.entry(record.employee_id).or_insert(0) += 1;
    }

    for record in overtime {
        *totals.overtime_hours.entry(record.employee_id).or_insert(0) += record.hours;
    }

    for claim in reimbursements {
        *totals
            .reimbursement_totals
            .entry(claim.employee_id)
            .or_insert(Decimal::ZERO) += claim.amount;
    }

    totals
}
