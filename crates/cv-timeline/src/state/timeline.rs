//! Revision timeline state

use gh_history_client::Commit;

use crate::domain_models::LoadingState;

/// Revision timeline state for the selected branch
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    /// Revisions as returned by the remote, newest first, never re-sorted
    pub revisions: Vec<Commit>,
    /// Cursor position in the list
    pub cursor: usize,
    /// Index of the active revision, the one the document pane shows
    pub active: Option<usize>,
    /// Fetch state for the commit list
    pub loading_state: LoadingState,
    /// Id of the newest commit fetch; completions with older ids are stale
    pub request_id: u64,
}

impl TimelineState {
    /// Sha of the active revision, if any
    pub fn active_sha(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.revisions.get(index))
            .map(|commit| commit.sha.as_str())
    }
}
