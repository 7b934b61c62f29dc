//! Payroll policy configuration.
//!
//! This module provides the [`PayrollPolicy`] type describing the fixed
//! assumptions the pay calculation runs on, and the [`PolicyLoader`] for
//! reading a policy from a YAML file.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::PayrollPolicy;
