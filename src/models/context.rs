//! Request context passed into engine entry points.
//!
//! Caller identity and role arrive pre-verified from the upstream
//! authentication collaborator; the engine never inspects credentials.
//! Carrying them as an explicit value keeps ambient request state out of
//! globals and thread-locals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role attached to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrators create periods and run payroll.
    Admin,
    /// Employees submit activity and read their own payslips.
    Employee,
}

/// Verified per-request caller state.
///
/// One value is constructed per in-flight call and passed explicitly into
/// every engine entry point, so audit entries can record who acted, from
/// where, and under which correlation identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The authenticated caller.
    pub caller_id: Uuid,
    /// The caller's verified role.
    pub role: Role,
    /// Source IP recorded for audit purposes.
    pub source_ip: String,
    /// Correlation identifier linking audit entries to the request.
    pub request_id: String,
}

impl RequestContext {
    /// Creates a context for an authenticated caller.
    pub fn new(
        caller_id: Uuid,
        role: Role,
        source_ip: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            caller_id,
            role,
            source_ip: source_ip.into(),
            request_id: request_id.into(),
        }
    }
}
