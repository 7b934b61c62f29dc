//! Payslip Generation Engine
//!
//! This crate computes employee payroll for administrator-defined attendance
//! periods: it aggregates attendance days, overtime hours and reimbursement
//! claims per employee, combines them with base salaries, and produces one
//! payslip per employee with qualifying activity plus a run-level summary.
//! Each period can be processed exactly once.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
