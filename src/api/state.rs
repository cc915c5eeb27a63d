//! Application state for the levy reduction engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded policy tables.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy tables, one per effective year.
    policies: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given policy loader.
    pub fn new(policies: PolicyLoader) -> Self {
        Self {
            policies: Arc::new(policies),
        }
    }

    /// Returns a reference to the policy loader.
    pub fn policies(&self) -> &PolicyLoader {
        &self.policies
    }
}
