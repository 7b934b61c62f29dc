//! The payroll engine: period validation, payslip computation and the
//! atomic run commit.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditAction, AuditLogEntry, EmployeeSummary, PayrollRun, Payslip, PayslipSummary,
    RequestContext,
};
use crate::store::PayrollStore;

use super::aggregate::aggregate_activity;
use super::calculate::compute_pay;

/// Computes and persists payroll for attendance periods.
///
/// The engine is invoked once per (period, initiator) pair. It validates the
/// period, aggregates the period's activity, derives one payslip per
/// employee with qualifying activity, and commits the run, payslips and
/// audit entry as one atomic unit. A period can be settled at most once;
/// re-invocations are rejected, never merged.
pub struct PayrollEngine {
    store: Arc<dyn PayrollStore>,
    policy: PayrollPolicy,
}

impl PayrollEngine {
    /// Creates an engine over the given store and policy.
    pub fn new(store: Arc<dyn PayrollStore>, policy: PayrollPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the policy the engine calculates with.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Executes payroll for one attendance period.
    ///
    /// Every employee with any qualifying activity in the period receives a
    /// payslip: attendance drives prorated salary, overtime drives overtime
    /// pay, and reimbursements are added as-is. An employee whose only
    /// activity is a reimbursement claim is paid exactly that claim.
    ///
    /// A period with no qualifying activity at all still commits a run with
    /// zero payslips. The period counts as settled and cannot be re-run, and
    /// [`PayrollEngine::summary`] reports such a run as unavailable.
    ///
    /// # Errors
    ///
    /// - [`EngineError::PeriodNotFound`] when the period does not exist.
    /// - [`EngineError::AlreadyProcessed`] when the period already has a
    ///   run, including when a concurrent call wins the commit race.
    /// - [`EngineError::DataAccess`] when storage fails; the commit is
    ///   all-or-nothing, so no partial payslips remain.
    pub fn process_payroll(
        &self,
        period_id: Uuid,
        ctx: &RequestContext,
    ) -> EngineResult<PayrollRun> {
        let period = self
            .store
            .find_period(period_id)?
            .ok_or(EngineError::PeriodNotFound { period_id })?;

        // Fast-fail before loading anything; the commit re-checks under the
        // store's own atomic guard.
        if self.store.run_exists_for_period(period_id)? {
            warn!(
                request_id = %ctx.request_id,
                period_id = %period_id,
                "Rejecting repeat payroll run"
            );
            return Err(EngineError::AlreadyProcessed { period_id });
        }

        let attendance = self.store.attendance_in(&period)?;
        let overtime = self.store.overtime_in(&period)?;
        let reimbursements = self.store.reimbursements_in(&period)?;

        let totals = aggregate_activity(&attendance, &overtime, &reimbursements);
        let employee_ids = totals.employee_ids();

        let salaries: HashMap<Uuid, Decimal> = self
            .store
            .employees_by_id(&employee_ids)?
            .into_iter()
            .map(|e| (e.id, e.monthly_salary))
            .collect();

        let run = PayrollRun {
            id: Uuid::new_v4(),
            period_id,
            initiated_by: ctx.caller_id,
            source_ip: ctx.source_ip.clone(),
            created_at: Utc::now(),
        };

        let payslips: Vec<Payslip> = employee_ids
            .iter()
            .map(|&employee_id| {
                // An active employee without a salary row is paid on a zero
                // base, matching the aggregation-driven payout rule.
                let base_salary = salaries.get(&employee_id).copied().unwrap_or(Decimal::ZERO);
                let attendance_days = totals.attendance_days(employee_id);
                let overtime_hours = totals.overtime_hours(employee_id);
                let reimbursement_total = totals.reimbursement_total(employee_id);
                let pay = compute_pay(
                    base_salary,
                    attendance_days,
                    overtime_hours,
                    reimbursement_total,
                    &self.policy,
                );

                Payslip {
                    id: Uuid::new_v4(),
                    run_id: run.id,
                    employee_id,
                    base_salary,
                    attendance_days,
                    prorated_salary: pay.prorated_salary,
                    overtime_hours,
                    overtime_pay: pay.overtime_pay,
                    reimbursement_total,
                    take_home_pay: pay.take_home_pay,
                }
            })
            .collect();

        let audit = AuditLogEntry {
            id: Uuid::new_v4(),
            record_id: run.id,
            action: AuditAction::Create,
            performed_by: ctx.caller_id,
            source_ip: ctx.source_ip.clone(),
            request_id: ctx.request_id.clone(),
            timestamp: Utc::now(),
        };

        let run_id = run.id;
        let payslip_count = payslips.len();
        self.store.commit_run(run.clone(), payslips, audit)?;

        info!(
            request_id = %ctx.request_id,
            period_id = %period_id,
            run_id = %run_id,
            payslips = payslip_count,
            "Payroll run committed"
        );

        Ok(run)
    }

    /// Returns per-employee take-home pays for a run plus their sum.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SummaryUnavailable`] when the run has no
    /// payslips.
    pub fn summary(&self, run_id: Uuid) -> EngineResult<PayslipSummary> {
        let payslips = self.store.payslips_for_run(run_id)?;
        if payslips.is_empty() {
            return Err(EngineError::SummaryUnavailable { run_id });
        }

        let employee_ids: Vec<Uuid> = payslips.iter().map(|p| p.employee_id).collect();
        let usernames: HashMap<Uuid, String> = self
            .store
            .employees_by_id(&employee_ids)?
            .into_iter()
            .map(|e| (e.id, e.username))
            .collect();

        let mut total_take_home = Decimal::ZERO;
        let employee_summaries = payslips
            .iter()
            .map(|p| {
                total_take_home += p.take_home_pay;
                EmployeeSummary {
                    employee_id: p.employee_id,
                    username: usernames
                        .get(&p.employee_id)
                        .cloned()
                        .unwrap_or_default(),
                    take_home_pay: p.take_home_pay,
                }
            })
            .collect();

        Ok(PayslipSummary {
            employee_summaries,
            total_take_home,
        })
    }

    /// Returns one employee's payslip under a run.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PayslipNotFound`] when no matching payslip
    /// exists, including when the employee had no qualifying activity in
    /// the period.
    pub fn payslip(&self, employee_id: Uuid, run_id: Uuid) -> EngineResult<Payslip> {
        self.store
            .find_payslip(employee_id, run_id)?
            .ok_or(EngineError::PayslipNotFound {
                employee_id,
                run_id,
            })
    }
}
