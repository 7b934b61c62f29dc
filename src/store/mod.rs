//! Storage abstractions the payroll engine depends on.
//!
//! The engine only needs logical read/write operations; how rows are held
//! (in memory here, a database in a larger deployment) stays behind these
//! traits. Each trait covers one leaf capability: periods, run uniqueness,
//! activity records, and the payslip ledger.

mod memory;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AttendancePeriod, AttendanceRecord, AuditLogEntry, Employee, OvertimeRecord, PayrollRun,
    Payslip, ReimbursementClaim,
};

pub use memory::InMemoryStore;

/// Read and write attendance periods.
pub trait PeriodStore {
    /// Persists a new attendance period.
    fn insert_period(&self, period: AttendancePeriod) -> EngineResult<()>;

    /// Looks up a period by id.
    fn find_period(&self, period_id: Uuid) -> EngineResult<Option<AttendancePeriod>>;
}

/// Check whether payroll has already been executed for a period.
pub trait RunRegistry {
    /// Returns true when a payroll run exists for the period.
    fn run_exists_for_period(&self, period_id: Uuid) -> EngineResult<bool>;
}

/// Read and write employee activity and base salaries.
pub trait ActivityStore {
    /// Registers an employee.
    fn insert_employee(&self, employee: Employee) -> EngineResult<()>;

    /// Persists an attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::DuplicateSubmission`] when the
    /// employee already has attendance for the same date.
    fn insert_attendance(&self, record: AttendanceRecord) -> EngineResult<()>;

    /// Persists an overtime record, with the same per-day uniqueness rule
    /// as attendance.
    fn insert_overtime(&self, record: OvertimeRecord) -> EngineResult<()>;

    /// Persists a reimbursement claim. Multiple claims per day are allowed.
    fn insert_reimbursement(&self, claim: ReimbursementClaim) -> EngineResult<()>;

    /// Attendance records whose date falls inside the period.
    fn attendance_in(&self, period: &AttendancePeriod) -> EngineResult<Vec<AttendanceRecord>>;

    /// Overtime records whose date falls inside the period.
    fn overtime_in(&self, period: &AttendancePeriod) -> EngineResult<Vec<OvertimeRecord>>;

    /// Reimbursement claims whose creation date falls inside the period.
    fn reimbursements_in(
        &self,
        period: &AttendancePeriod,
    ) -> EngineResult<Vec<ReimbursementClaim>>;

    /// Employees matching the given ids. Unknown ids are skipped.
    fn employees_by_id(&self, employee_ids: &[Uuid]) -> EngineResult<Vec<Employee>>;
}

/// Persist payroll runs, payslips and audit entries.
pub trait LedgerStore {
    /// Commits one payroll run with all its payslips and the audit entry as
    /// a single atomic unit.
    ///
    /// The run-per-period uniqueness check happens inside the same unit, so
    /// two concurrent commits for one period cannot both land: the loser
    /// receives [`crate::error::EngineError::AlreadyProcessed`] and writes
    /// nothing.
    fn commit_run(
        &self,
        run: PayrollRun,
        payslips: Vec<Payslip>,
        audit: AuditLogEntry,
    ) -> EngineResult<()>;

    /// All payslips created under a run.
    fn payslips_for_run(&self, run_id: Uuid) -> EngineResult<Vec<Payslip>>;

    /// One employee's payslip under a run, if any.
    fn find_payslip(&self, employee_id: Uuid, run_id: Uuid) -> EngineResult<Option<Payslip>>;

    /// Audit entries recorded against a record id.
    fn audit_entries_for(&self, record_id: Uuid) -> EngineResult<Vec<AuditLogEntry>>;
}

/// Everything the payroll engine needs from storage, in one bound.
pub trait PayrollStore:
    PeriodStore + RunRegistry + ActivityStore + LedgerStore + Send + Sync
{
}

impl<T> PayrollStore for T where
    T: PeriodStore + RunRegistry + ActivityStore + LedgerStore + Send + Sync
{
}
