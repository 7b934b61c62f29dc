//! Error types for the Payslip Generation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Payslip Generation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
/// use uuid::Uuid;
///
/// let period_id = Uuid::nil();
/// let error = EngineError::PeriodNotFound { period_id };
/// assert_eq!(
///     error.to_string(),
///     format!("Attendance period not found: {period_id}")
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced attendance period does not exist.
    #[error("Attendance period not found: {period_id}")]
    PeriodNotFound {
        /// The period identifier that was not found.
        period_id: Uuid,
    },

    /// An attendance period had an invalid date range.
    #[error("Invalid attendance period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// Payroll has already been executed for the period.
    #[error("Payroll already processed for period {period_id}")]
    AlreadyProcessed {
        /// The period that already has a payroll run.
        period_id: Uuid,
    },

    /// A second attendance or overtime record was submitted for the same day.
    #[error("Employee {employee_id} already has a submission for {date}")]
    DuplicateSubmission {
        /// The employee who double-submitted.
        employee_id: Uuid,
        /// The day that already has a record.
        date: NaiveDate,
    },

    /// A submitted record violated a policy rule.
    #[error("Invalid {field}: {message}")]
    InvalidSubmission {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No payslip exists for the employee under the given run.
    #[error("Payslip not found for employee {employee_id} in run {run_id}")]
    PayslipNotFound {
        /// The employee whose payslip was requested.
        employee_id: Uuid,
        /// The payroll run that was searched.
        run_id: Uuid,
    },

    /// The payroll run has no payslips to summarise.
    #[error("No payslip summary available for run {run_id}")]
    SummaryUnavailable {
        /// The payroll run that was searched.
        run_id: Uuid,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An underlying storage read or write failed.
    #[error("Data access failure: {message}")]
    DataAccess {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_not_found_displays_id() {
        let period_id = Uuid::nil();
        let error = EngineError::PeriodNotFound { period_id };
        assert_eq!(
            error.to_string(),
            "Attendance period not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_already_processed_displays_period() {
        let period_id = Uuid::nil();
        let error = EngineError::AlreadyProcessed { period_id };
        assert!(error.to_string().starts_with("Payroll already processed"));
    }

    #[test]
    fn test_duplicate_submission_displays_date() {
        let error = EngineError::DuplicateSubmission {
            employee_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        };
        assert!(error.to_string().contains("2026-03-02"));
    }

    #[test]
    fn test_invalid_submission_displays_field_and_message() {
        let error = EngineError::InvalidSubmission {
            field: "hours".to_string(),
            message: "must be between 1 and 3".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid hours: must be between 1 and 3");
    }

    #[test]
    fn test_policy_parse_displays_path_and_message() {
        let error = EngineError::PolicyParse {
            path: "/config/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse policy file '/config/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_data_access() -> EngineResult<()> {
            Err(EngineError::DataAccess {
                message: "connection reset".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_data_access()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
