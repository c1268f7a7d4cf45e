//! Application state for the wage estimation API.

use std::sync::Arc;

use crate::config::WageRateTable;

/// Shared application state.
///
/// Holds the process-wide wage-rate table used by all estimation requests.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<WageRateTable>,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(rates: WageRateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the wage-rate table.
    pub fn rates(&self) -> &WageRateTable {
        &self.rates
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WageRateTable::default())
    }
}
