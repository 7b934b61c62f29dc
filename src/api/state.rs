//! Application state for the Payslip Generation Engine API.

use std::sync::Arc;

use crate::config::PayrollPolicy;
use crate::engine::PayrollEngine;
use crate::store::PayrollStore;

/// Shared application state.
///
/// Holds the storage backend and the payroll engine built over it; both are
/// shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PayrollStore>,
    engine: Arc<PayrollEngine>,
}

impl AppState {
    /// Creates application state over a store and policy.
    pub fn new(store: Arc<dyn PayrollStore>, policy: PayrollPolicy) -> Self {
        let engine = Arc::new(PayrollEngine::new(store.clone(), policy));
        Self { store, engine }
    }

    /// Returns the storage backend.
    pub fn store(&self) -> &Arc<dyn PayrollStore> {
        &self.store
    }

    /// Returns the payroll engine.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }
}
