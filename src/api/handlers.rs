//! HTTP request handlers for the Payslip Generation Engine API.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc, Weekday};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AttendancePeriod, AttendanceRecord, Employee, OvertimeRecord, ReimbursementClaim,
    RequestContext, Role,
};

use super::request::{
    AttendanceRequest, CreatePeriodRequest, OvertimeRequest, RegisterEmployeeRequest,
    ReimbursementRequest, RunPayrollRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeCreated, PeriodCreated, RunCreated,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(register_employee))
        .route("/periods", post(create_period))
        .route("/attendance", post(submit_attendance))
        .route("/overtime", post(submit_overtime))
        .route("/reimbursements", post(submit_reimbursement))
        .route("/payroll", post(run_payroll))
        .route("/payroll/:run_id/summary", get(get_summary))
        .route("/payroll/:run_id/payslip", get(get_payslip))
        .with_state(state)
}

/// Builds the per-request context from identity headers.
///
/// The upstream authentication collaborator is expected to have verified
/// the caller and attached `x-employee-id` and `x-role`; the correlation id
/// and source IP are best-effort.
fn request_context(headers: &HeaderMap) -> Result<RequestContext, ApiErrorResponse> {
    let caller_id = headers
        .get("x-employee-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .ok_or_else(|| ApiErrorResponse {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::unauthenticated("missing or invalid x-employee-id header"),
        })?;

    let role = match headers.get("x-role").and_then(|v| v.to_str().ok()) {
        Some("admin") => Role::Admin,
        Some("employee") => Role::Employee,
        _ => {
            return Err(ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::unauthenticated("missing or invalid x-role header"),
            });
        }
    };

    let source_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(RequestContext::new(caller_id, role, source_ip, request_id))
}

fn require_role(ctx: &RequestContext, role: Role) -> Result<(), ApiErrorResponse> {
    if ctx.role == role {
        Ok(())
    } else {
        Err(ApiErrorResponse {
            status: StatusCode::FORBIDDEN,
            error: ApiError::forbidden(),
        })
    }
}

/// Unwraps a JSON payload, mapping axum rejections to 400 responses.
fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    ApiError::new("VALIDATION_ERROR", err.body_text())
                }
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

fn is_weekend(date: chrono::NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

async fn register_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RegisterEmployeeRequest>, JsonRejection>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Admin)?;
        let request = parse_json(payload)?;

        if request.monthly_salary < Decimal::ZERO {
            return Err(EngineError::InvalidSubmission {
                field: "monthly_salary".to_string(),
                message: "must not be negative".to_string(),
            }
            .into());
        }

        let employee = Employee {
            id: Uuid::new_v4(),
            username: request.username,
            monthly_salary: request.monthly_salary,
            role: Role::Employee,
        };
        let employee_id = employee.id;
        state.store().insert_employee(employee)?;

        info!(employee_id = %employee_id, "Employee registered");
        Ok::<_, ApiErrorResponse>((StatusCode::CREATED, Json(EmployeeCreated { employee_id })))
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn create_period(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreatePeriodRequest>, JsonRejection>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Admin)?;
        let request = parse_json(payload)?;

        let period = AttendancePeriod::new(request.start_date, request.end_date, ctx.caller_id)?;
        let period_id = period.id;
        state.store().insert_period(period)?;

        info!(
            request_id = %ctx.request_id,
            period_id = %period_id,
            "Attendance period created"
        );
        Ok::<_, ApiErrorResponse>((StatusCode::CREATED, Json(PeriodCreated { period_id })))
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn submit_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Employee)?;
        let request = parse_json(payload)?;

        if is_weekend(request.date) {
            return Err(EngineError::InvalidSubmission {
                field: "date".to_string(),
                message: "attendance cannot be submitted for a weekend".to_string(),
            }
            .into());
        }

        state.store().insert_attendance(AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: ctx.caller_id,
            date: request.date,
            created_at: Utc::now(),
        })?;

        info!(
            request_id = %ctx.request_id,
            employee_id = %ctx.caller_id,
            date = %request.date,
            "Attendance submitted"
        );
        Ok::<_, ApiErrorResponse>(StatusCode::CREATED)
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn submit_overtime(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Employee)?;
        let request = parse_json(payload)?;

        let cap = state.engine().policy().max_overtime_hours_per_day;
        if request.hours == 0 || request.hours > cap {
            return Err(EngineError::InvalidSubmission {
                field: "hours".to_string(),
                message: format!("must be between 1 and {cap}"),
            }
            .into());
        }

        state.store().insert_overtime(OvertimeRecord {
            id: Uuid::new_v4(),
            employee_id: ctx.caller_id,
            date: request.date,
            hours: request.hours,
            created_at: Utc::now(),
        })?;

        info!(
            request_id = %ctx.request_id,
            employee_id = %ctx.caller_id,
            hours = request.hours,
            "Overtime submitted"
        );
        Ok::<_, ApiErrorResponse>(StatusCode::CREATED)
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn submit_reimbursement(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ReimbursementRequest>, JsonRejection>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Employee)?;
        let request = parse_json(payload)?;

        if request.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidSubmission {
                field: "amount".to_string(),
                message: "must be positive".to_string(),
            }
            .into());
        }

        state.store().insert_reimbursement(ReimbursementClaim {
            id: Uuid::new_v4(),
            employee_id: ctx.caller_id,
            amount: request.amount,
            description: request.description,
            created_at: Utc::now(),
        })?;

        info!(
            request_id = %ctx.request_id,
            employee_id = %ctx.caller_id,
            amount = %request.amount,
            "Reimbursement claim submitted"
        );
        Ok::<_, ApiErrorResponse>(StatusCode::CREATED)
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn run_payroll(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RunPayrollRequest>, JsonRejection>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Admin)?;
        let request = parse_json(payload)?;

        info!(
            request_id = %ctx.request_id,
            period_id = %request.period_id,
            "Processing payroll run"
        );

        let run = state
            .engine()
            .process_payroll(request.period_id, &ctx)
            .map_err(|err| {
                warn!(
                    request_id = %ctx.request_id,
                    period_id = %request.period_id,
                    error = %err,
                    "Payroll run failed"
                );
                err
            })?;

        Ok::<_, ApiErrorResponse>((
            StatusCode::CREATED,
            Json(RunCreated {
                run_id: run.id,
                period_id: run.period_id,
            }),
        ))
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(run_id): Path<Uuid>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Admin)?;
        let summary = state.engine().summary(run_id)?;
        Ok::<_, ApiErrorResponse>(Json(summary))
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

async fn get_payslip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(run_id): Path<Uuid>,
) -> Response {
    let result = (|| {
        let ctx = request_context(&headers)?;
        require_role(&ctx, Role::Employee)?;
        // Owner-only: the caller can only ever read their own payslip.
        let payslip = state.engine().payslip(ctx.caller_id, run_id)?;
        Ok::<_, ApiErrorResponse>(Json(payslip))
    })();

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(id: &str, role: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-employee-id", HeaderValue::from_str(id).unwrap());
        headers.insert("x-role", HeaderValue::from_str(role).unwrap());
        headers
    }

    #[test]
    fn test_request_context_reads_identity_headers() {
        let id = Uuid::new_v4();
        let mut headers = headers_with(&id.to_string(), "admin");
        headers.insert("x-request-id", HeaderValue::from_static("req-9"));
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.1.2.3"));

        let ctx = request_context(&headers).unwrap();
        assert_eq!(ctx.caller_id, id);
        assert_eq!(ctx.role, Role::Admin);
        assert_eq!(ctx.request_id, "req-9");
        assert_eq!(ctx.source_ip, "10.1.2.3");
    }

    #[test]
    fn test_request_context_generates_request_id_when_missing() {
        let headers = headers_with(&Uuid::new_v4().to_string(), "employee");
        let ctx = request_context(&headers).unwrap();
        assert!(!ctx.request_id.is_empty());
        assert_eq!(ctx.source_ip, "unknown");
    }

    #[test]
    fn test_request_context_rejects_bad_role() {
        let headers = headers_with(&Uuid::new_v4().to_string(), "superuser");
        let result = request_context(&headers);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_context_rejects_missing_identity() {
        let result = request_context(&HeaderMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_require_role_rejects_mismatch() {
        let ctx = RequestContext::new(Uuid::new_v4(), Role::Employee, "ip", "req");
        assert!(require_role(&ctx, Role::Admin).is_err());
        assert!(require_role(&ctx, Role::Employee).is_ok());
    }

    #[test]
    fn test_is_weekend() {
        // 2026-03-07 is a Saturday, 2026-03-09 a Monday.
        assert!(is_weekend(chrono::NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()));
        assert!(!is_weekend(chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()));
    }
}
