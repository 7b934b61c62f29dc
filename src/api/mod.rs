//! HTTP API module for the Payslip Generation Engine.
//!
//! This module provides the REST endpoints for registering employees,
//! recording activity, running payroll and reading payslips. Caller
//! identity arrives pre-verified in headers from the upstream
//! authentication collaborator; the handlers only enforce role gates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, CreatePeriodRequest, OvertimeRequest, RegisterEmployeeRequest,
    ReimbursementRequest, RunPayrollRequest,
};
pub use response::ApiError;
pub use state::AppState;
