//! Attendance period model.
//!
//! This module contains the [`AttendancePeriod`] type which defines the
//! date window over which one payroll run is computed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// An administrator-defined date range over which payroll is computed.
///
/// Periods are immutable once created and can be processed by payroll
/// at most once.
///
/// # Example
///
/// ```
/// use payslip_engine::models::AttendancePeriod;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let period = AttendancePeriod::new(
///     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     Uuid::new_v4(),
/// ).unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePeriod {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
    /// The administrator who created the period.
    pub created_by: Uuid,
    /// When the period was created.
    pub created_at: DateTime<Utc>,
}

impl AttendancePeriod {
    /// Creates a new attendance period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when `start_date` does not
    /// strictly precede `end_date`.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        created_by: Uuid,
    ) -> EngineResult<Self> {
        if start_date >= end_date {
            return Err(EngineError::InvalidPeriod {
                message: format!("start date {start_date} must precede end date {end_date}"),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            created_by,
            created_at: Utc::now(),
        })
    }

    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
