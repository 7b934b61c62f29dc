//! Response types for the Payslip Generation Engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a forbidden-role error response.
    pub fn forbidden() -> Self {
        Self::new("FORBIDDEN", "Caller role is not allowed to perform this action")
    }

    /// Creates a missing/invalid identity error response.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new("UNAUTHENTICATED", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::PeriodNotFound { .. } => (StatusCode::NOT_FOUND, "PERIOD_NOT_FOUND"),
            EngineError::PayslipNotFound { .. } => (StatusCode::NOT_FOUND, "PAYSLIP_NOT_FOUND"),
            EngineError::SummaryUnavailable { .. } => {
                (StatusCode::NOT_FOUND, "SUMMARY_UNAVAILABLE")
            }
            EngineError::AlreadyProcessed { .. } => (StatusCode::CONFLICT, "ALREADY_PROCESSED"),
            EngineError::DuplicateSubmission { .. } => {
                (StatusCode::CONFLICT, "DUPLICATE_SUBMISSION")
            }
            EngineError::InvalidPeriod { .. } => (StatusCode::BAD_REQUEST, "INVALID_PERIOD"),
            EngineError::InvalidSubmission { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_SUBMISSION")
            }
            EngineError::PolicyNotFound { .. } | EngineError::PolicyParse { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "POLICY_ERROR")
            }
            EngineError::DataAccess { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_ACCESS_FAILURE")
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

/// Response body confirming a created employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreated {
    /// The new employee's identifier.
    pub employee_id: Uuid,
}

/// Response body confirming a created attendance period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodCreated {
    /// The new period's identifier.
    pub period_id: Uuid,
}

/// Response body confirming a committed payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCreated {
    /// The new run's identifier.
    pub run_id: Uuid,
    /// The period the run settled.
    pub period_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
    }

    #[test]
    fn test_error_response_is_debug() {
        // Required so Result<_, ApiErrorResponse> can be unwrapped in tests
        fn assert_debug<T: std::fmt::Debug>() {}
        assert_debug::<ApiErrorResponse>();
    }

    #[test]
    fn test_period_not_found_maps_to_404() {
        let error = EngineError::PeriodNotFound {
            period_id: Uuid::nil(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "PERIOD_NOT_FOUND");
    }

    #[test]
    fn test_already_processed_maps_to_409() {
        let error = EngineError::AlreadyProcessed {
            period_id: Uuid::nil(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_submission_maps_to_400() {
        let error = EngineError::InvalidSubmission {
            field: "amount".to_string(),
            message: "must be positive".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_data_access_maps_to_500() {
        let error = EngineError::DataAccess {
            message: "disk on fire".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
