//! Loading state for remote data

/// Lifecycle of a remote fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request completed successfully
    Loaded,
    /// Request failed with a user-facing message
    Error(String),
}

impl LoadingState {
    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
