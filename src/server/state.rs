use crate::config::DiffLimits;

/// Shared, read-only router state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub limits: DiffLimits,
}

impl AppState {
    pub fn new(limits: DiffLimits) -> Self {
        AppState { limits }
    }
}
