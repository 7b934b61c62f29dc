//! Payroll computation logic.
//!
//! This module contains the aggregation of raw activity records into
//! per-employee totals, the pure pay calculation, and the payroll engine
//! that validates a period, computes payslips and commits the run.

mod aggregate;
mod calculate;
mod payroll;

pub use aggregate::{ActivityTotals, aggregate_activity};
pub use calculate::{PayComputation, compute_pay};
pub use payroll::PayrollEngine;
