//! Application state for the SAD Pay Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTables;

/// Shared application state.
///
/// Holds the rate tables behind an `Arc`; handlers only read them, so
/// concurrent requests never interfere.
#[derive(Clone)]
pub struct AppState {
    tables: Arc<RateTables>,
}

impl AppState {
    /// Creates a new application state with the given rate tables.
    pub fn new(tables: RateTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the rate tables.
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::create_test_tables;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_tables() {
        let state = AppState::new(create_test_tables());
        let clone = state.clone();
        assert!(std::ptr::eq(state.tables(), clone.tables()));
    }
}
