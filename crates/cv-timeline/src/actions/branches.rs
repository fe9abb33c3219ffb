//! Branch strip actions

use gh_history_client::Branch;

/// Actions for the branch strip
#[derive(Debug, Clone)]
pub enum BranchAction {
    /// Fetch the branch list from the remote repository
    Load,
    /// Branch list fetched successfully
    Loaded(Vec<Branch>),
    /// Branch list fetch failed, with a user-facing message
    LoadError(String),
    /// Select the next branch in the strip, wrapping at the end
    SelectNext,
}
