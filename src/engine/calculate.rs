//! Pure pay calculation for one employee.
//!
//! All money math stays in `Decimal`; the only rounding is the explicit
//! floor the proration and hourly-rate derivations call for.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;

/// The computed pay components for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayComputation {
    /// Base salary scaled by attended working days, floored.
    pub prorated_salary: Decimal,
    /// Base salary divided over expected working hours, floored.
    pub hourly_rate: Decimal,
    /// Overtime hours paid at the policy multiplier of the hourly rate.
    pub overtime_pay: Decimal,
    /// Prorated salary + overtime pay + reimbursement total.
    pub take_home_pay: Decimal,
}

/// Computes the pay breakdown for one employee.
///
/// ```text
/// prorated_salary = floor(base_salary * attendance_days / working_days_per_month)
/// hourly_rate     = floor(base_salary / (working_days_per_month * hours_per_working_day))
/// overtime_pay    = overtime_multiplier * hourly_rate * overtime_hours
/// take_home_pay   = prorated_salary + overtime_pay + reimbursement_total
/// ```
///
/// # Example
///
/// ```
/// use payslip_engine::config::PayrollPolicy;
/// use payslip_engine::engine::compute_pay;
/// use rust_decimal::Decimal;
///
/// let pay = compute_pay(
///     Decimal::from(8_000_000_i64),
///     10,
///     2,
///     Decimal::ZERO,
///     &PayrollPolicy::default(),
/// );
/// assert_eq!(pay.take_home_pay, Decimal::from(4_200_000_i64));
/// ```
pub fn compute_pay(
    base_salary: Decimal,
    attendance_days: u32,
    overtime_hours: u32,
    reimbursement_total: Decimal,
    policy: &PayrollPolicy,
) -> PayComputation {
    let working_days = Decimal::from(policy.working_days_per_month);
    let monthly_hours =
        Decimal::from(policy.working_days_per_month * policy.hours_per_working_day);

    let prorated_salary = (base_salary * Decimal::from(attendance_days) / working_days)
        .floor()
        .normalize();
    let hourly_rate = (base_salary / monthly_hours).floor().normalize();
    let overtime_pay =
        Decimal::from(policy.overtime_multiplier) * hourly_rate * Decimal::from(overtime_hours);
    let take_home_pay = prorated_salary + overtime_pay + reimbursement_total;

    PayComputation {
        prorated_salary,
        hourly_rate,
        overtime_pay,
        take_home_pay,
    }
}
