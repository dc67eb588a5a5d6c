//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::AttendanceStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded statutory rate configuration and the storage-read capability.
#[derive(Clone)]
pub struct AppState {
    /// The loaded statutory rate configuration.
    config: Arc<ConfigLoader>,
    /// The storage backend reports are read from.
    store: Arc<dyn AttendanceStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn AttendanceStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the storage backend.
    pub fn store(&self) -> &dyn AttendanceStore {
        self.store.as_ref()
    }
}
