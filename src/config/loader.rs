//! Policy loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

/// Loads and provides access to the payroll policy.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// assert_eq!(loader.policy().working_days_per_month, 20);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayrollPolicy,
}

impl PolicyLoader {
    /// Loads the policy from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PolicyNotFound`] when the file cannot be read,
    /// [`EngineError::PolicyParse`] when it is not valid policy YAML, and a
    /// validation error when the loaded policy contains zero divisors.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        let policy: PayrollPolicy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParse {
                path: path_str,
                message: e.to_string(),
            })?;
        policy.validate()?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }
}
