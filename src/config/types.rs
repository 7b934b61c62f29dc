//! Policy types deserialized from YAML configuration.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The payroll assumptions used by the pay calculation.
///
/// The defaults encode the product rules: a 20-working-day month, 8-hour
/// working days, double-rate overtime, and at most 3 overtime hours per day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayrollPolicy {
    /// Working days assumed per month when prorating salary.
    #[serde(default = "default_working_days")]
    pub working_days_per_month: u32,
    /// Hours in one working day, used to derive the hourly rate.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_working_day: u32,
    /// Multiplier applied to the hourly rate for overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: u32,
    /// Maximum overtime hours an employee may submit for one day.
    #[serde(default = "default_max_overtime_hours")]
    pub max_overtime_hours_per_day: u32,
}

fn default_working_days() -> u32 {
    20
}

fn default_hours_per_day() -> u32 {
    8
}

fn default_overtime_multiplier() -> u32 {
    2
}

fn default_max_overtime_hours() -> u32 {
    3
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            working_days_per_month: default_working_days(),
            hours_per_working_day: default_hours_per_day(),
            overtime_multiplier: default_overtime_multiplier(),
            max_overtime_hours_per_day: default_max_overtime_hours(),
        }
    }
}

impl PayrollPolicy {
    /// Validates that the policy can drive a calculation.
    ///
    /// The prorating divisors must be non-zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.working_days_per_month == 0 {
            return Err(EngineError::InvalidSubmission {
                field: "working_days_per_month".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.hours_per_working_day == 0 {
            return Err(EngineError::InvalidSubmission {
                field: "hours_per_working_day".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
