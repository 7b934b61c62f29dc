//! In-memory storage backing the payroll engine.
//!
//! All state lives behind one mutex, so every uniqueness check and the
//! insert it guards happen under a single lock acquisition. That gives the
//! run-per-period constraint the serializable check-then-act the engine
//! relies on.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendancePeriod, AttendanceRecord, AuditLogEntry, Employee, OvertimeRecord, PayrollRun,
    Payslip, ReimbursementClaim,
};

use super::{ActivityStore, LedgerStore, PeriodStore, RunRegistry};

#[derive(Debug, Default)]
struct StoreState {
    periods: HashMap<Uuid, AttendancePeriod>,
    employees: HashMap<Uuid, Employee>,
    attendance: Vec<AttendanceRecord>,
    overtime: Vec<OvertimeRecord>,
    reimbursements: Vec<ReimbursementClaim>,
    runs: Vec<PayrollRun>,
    payslips: Vec<Payslip>,
    audit_log: Vec<AuditLogEntry>,
}

/// Mutex-guarded in-memory implementation of all store traits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| EngineError::DataAccess {
            message: "store mutex poisoned".to_string(),
        })
    }
}

impl PeriodStore for InMemoryStore {
    fn insert_period(&self, period: AttendancePeriod) -> EngineResult<()> {
        let mut state = self.lock()?;
        state.periods.insert(period.id, period);
        Ok(())
    }

    fn find_period(&self, period_id: Uuid) -> EngineResult<Option<AttendancePeriod>> {
        let state = self.lock()?;
        Ok(state.periods.get(&period_id).cloned())
    }
}

impl RunRegistry for InMemoryStore {
    fn run_exists_for_period(&self, period_id: Uuid) -> EngineResult<bool> {
        let state = self.lock()?;
        Ok(state.runs.iter().any(|r| r.period_id == period_id))
    }
}

impl ActivityStore for InMemoryStore {
    fn insert_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut state = self.lock()?;
        state.employees.insert(employee.id, employee);
        Ok(())
    }

    fn insert_attendance(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut state = self.lock()?;
        let duplicate = state
            .attendance
            .iter()
            .any(|a| a.employee_id == record.employee_id && a.date == record.date);
        if duplicate {
            return Err(EngineError::DuplicateSubmission {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        state.attendance.push(record);
        Ok(())
    }

    fn insert_overtime(&self, record: OvertimeRecord) -> EngineResult<()> {
        let mut state = self.lock()?;
        let duplicate = state
            .overtime
            .iter()
            .any(|o| o.employee_id == record.employee_id && o.date == record.date);
        if duplicate {
            return Err(EngineError::DuplicateSubmission {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        state.overtime.push(record);
        Ok(())
    }

    fn insert_reimbursement(&self, claim: ReimbursementClaim) -> EngineResult<()> {
        let mut state = self.lock()?;
        state.reimbursements.push(claim);
        Ok(())
    }

    fn attendance_in(&self, period: &AttendancePeriod) -> EngineResult<Vec<AttendanceRecord>> {
        let state = self.lock()?;
        Ok(state
            .attendance
            .iter()
            .filter(|a| period.contains_date(a.date))
            .cloned()
            .collect())
    }

    fn overtime_in(&self, period: &AttendancePeriod) -> EngineResult<Vec<OvertimeRecord>> {
        let state = self.lock()?;
        Ok(state
            .overtime
            .iter()
            .filter(|o| period.contains_date(o.date))
            .cloned()
            .collect())
    }

    fn reimbursements_in(
        &self,
        period: &AttendancePeriod,
    ) -> EngineResult<Vec<ReimbursementClaim>> {
        let state = self.lock()?;
        Ok(state
            .reimbursements
            .iter()
            .filter(|r| period.contains_date(r.claim_date()))
            .cloned()
            .collect())
    }

    fn employees_by_id(&self, employee_ids: &[Uuid]) -> EngineResult<Vec<Employee>> {
        let state = self.lock()?;
        Ok(employee_ids
            .iter()
            .filter_map(|id| state.employees.get(id).cloned())
            .collect())
    }
}

impl LedgerStore for InMemoryStore {
    fn commit_run(
        &self,
        run: PayrollRun,
        payslips: Vec<Payslip>,
        audit: AuditLogEntry,
    ) -> EngineResult<()> {
        let mut state = self.lock()?;
        // Uniqueness check and writes share the lock: a racing commit for
        // the same period observes the winner's run and backs off whole.
        if state.runs.iter().any(|r| r.period_id == run.period_id) {
            return Err(EngineError::AlreadyProcessed {
                period_id: run.period_id,
            });
        }
        state.runs.push(run);
        state.payslips.extend(payslips);
        state.audit_log.push(audit);
        Ok(())
    }

    fn payslips_for_run(&self, run_id: Uuid) -> EngineResult<Vec<Payslip>> {
        let state = self.lock()?;
        Ok(state
            .payslips
            .iter()
            .filter(|p| p.run_id == run_id)
            .cloned()
            .collect())
    }

    fn find_payslip(&self, employee_id: Uuid, run_id: Uuid) -> EngineResult<Option<Payslip>> {
        let state = self.lock()?;
        Ok(state
            .payslips
            .iter()
            .find(|p| p.run_id == run_id && p.employee_id == employee_id)
            .cloned())
    }

    fn audit_entries_for(&self, record_id: Uuid) -> EngineResult<Vec<AuditLogEntry>> {
        let state = self.lock()?;
        Ok(state
            .audit_log
            .iter()
            .filter(|e| e.record_id == record_id)
            .cloned()
            .collect())
    }
}
