//! Application state for the web layer.

use crate::data::TransitData;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current dataset snapshot and its search cache
    pub data: TransitData,
}

impl AppState {
    /// Create a new app state.
    pub fn new(data: TransitData) -> Self {
        Self { data }
    }
}
