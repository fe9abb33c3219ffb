//! Branch strip state

use gh_history_client::Branch;

use crate::domain_models::LoadingState;

/// Branch strip state
#[derive(Debug, Clone, Default)]
pub struct BranchListState {
    /// Branches as returned by the remote, replaced wholesale on every fetch
    pub branches: Vec<Branch>,
    /// Index of the selected branch
    pub selected: usize,
    /// Fetch state for the branch list
    pub loading_state: LoadingState,
}

impl BranchListState {
    /// Name of the selected branch, if any
    pub fn selected_name(&self) -> Option<&str> {
        self.branches.get(self.selected).map(|b| b.name.as_str())
    }
}
