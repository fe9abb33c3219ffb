//! Revision timeline actions

use gh_history_client::Commit;

/// Actions for the revision timeline
#[derive(Debug, Clone)]
pub enum TimelineAction {
    /// Fetch the commit list for a branch
    Load { branch: String },
    /// Commit fetch started; `request_id` marks the newest in-flight fetch
    LoadStart { request_id: u64 },
    /// Commit fetch finished; completions carry the id they started with
    Loaded { request_id: u64, commits: Vec<Commit> },
    /// Commit fetch failed, with a user-facing message
    LoadError { request_id: u64, error: String },
    /// Move the cursor one revision down (older)
    NavigateNext,
    /// Move the cursor one revision up (newer)
    NavigatePrevious,
    /// Move the cursor to the newest revision
    NavigateToTop,
    /// Move the cursor to the oldest revision
    NavigateToBottom,
    /// Make the revision at `index` the one the document pane shows
    Activate { index: usize },
}
