//! Repository history middleware
//!
//! All remote repository access happens here: the branch list and the
//! per-branch commit history of the tracked file. Fetches run on a tokio
//! runtime owned by this middleware; completions re-enter the chain through
//! the dispatcher.
//!
//! Commit fetches are stamped with a monotonically increasing request id.
//! The id of the newest started fetch is authoritative: completions carrying
//! an older id get no follow-up effects here and are discarded by the
//! reducer, so switching branches quickly never shows the wrong history.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gh_history_client::{Commit, RepoHistoryClient};
use tokio::runtime::Runtime;

use crate::actions::{Action, BranchAction, DocumentAction, StatusBarAction, TimelineAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{default_branch_index, ViewMode};
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct HistoryMiddleware {
    runtime: Runtime,
    client: Arc<dyn RepoHistoryClient>,
    /// Id of the newest started commit fetch
    latest_request: Arc<AtomicU64>,
}

impl HistoryMiddleware {
    pub fn new(client: Arc<dyn RepoHistoryClient>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self {
            runtime,
            client,
            latest_request: Arc::new(AtomicU64::new(0)),
        }
    }

    fn load_branches(&self, state: &AppState, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let owner = state.app_config.owner.clone();
        let repo = state.app_config.repo.clone();

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Loading branches of {}/{}...", owner, repo),
            "Branches",
        )));

        self.runtime.spawn(async move {
            match client.list_branches(&owner, &repo).await {
                Ok(branches) => {
                    log::info!(
                        "Fetched {} branches for {}/{}",
                        branches.len(),
                        owner,
                        repo
                    );
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        format!("Loaded {} branches", branches.len()),
                        "Branches",
                    )));
                    dispatcher.dispatch(Action::Branches(BranchAction::Loaded(branches)));
                }
                Err(e) => {
                    log::error!("Failed to fetch branches for {}/{}: {}", owner, repo, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Failed to load branches: {}", e),
                        "Branches",
                    )));
                    dispatcher.dispatch(Action::Branches(BranchAction::LoadError(e.to_string())));
                }
            }
        });
    }

    fn load_commits(&self, branch: &str, state: &AppState, dispatcher: &Dispatcher) {
        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let owner = state.app_config.owner.clone();
        let repo = state.app_config.repo.clone();
        let path = state.app_config.file_path.clone();
        let branch = branch.to_string();

        dispatcher.dispatch(Action::Timeline(TimelineAction::LoadStart { request_id }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Loading history of {}...", branch),
            "Timeline",
        )));

        self.runtime.spawn(async move {
            match client
                .list_commits_for_path(&owner, &repo, &branch, &path)
                .await
            {
                Ok(commits) => {
                    log::info!(
                        "Fetched {} commits touching {} on {}",
                        commits.len(),
                        path,
                        branch
                    );
                    dispatcher.dispatch(Action::Timeline(TimelineAction::Loaded {
                        request_id,
                        commits,
                    }));
                }
                Err(e) => {
                    log::error!("Failed to fetch commits on {}: {}", branch, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Failed to load history: {}", e),
                        "Timeline",
                    )));
                    dispatcher.dispatch(Action::Timeline(TimelineAction::LoadError {
                        request_id,
                        error: e.to_string(),
                    }));
                }
            }
        });
    }

    /// Follow-up effects once a commit fetch lands: a status message, and in
    /// image mode an automatic open of the newest revision.
    fn on_commits_loaded(
        &self,
        request_id: u64,
        commits: &[Commit],
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        if request_id != self.latest_request.load(Ordering::SeqCst) {
            log::debug!("Skipping follow-up for superseded commit fetch {}", request_id);
            return;
        }

        match commits.first() {
            Some(newest) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Loaded {} revisions", commits.len()),
                    "Timeline",
                )));
                if state.document.mode == ViewMode::Image {
                    dispatcher.dispatch(Action::Document(DocumentAction::Open {
                        sha: newest.sha.clone(),
                    }));
                }
            }
            None => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    "No commits found for this branch.",
                    "Timeline",
                )));
            }
        }
    }
}

impl Middleware for HistoryMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Branches(BranchAction::Load) => {
                self.load_branches(state, dispatcher);
                // Let action pass through so the reducer marks loading
                true
            }
            Action::Branches(BranchAction::Loaded(branches)) => {
                // The default branch drives the first timeline fetch
                if let Some(branch) = branches.get(default_branch_index(branches)) {
                    dispatcher.dispatch(Action::Timeline(TimelineAction::Load {
                        branch: branch.name.clone(),
                    }));
                }
                true
            }
            Action::Branches(BranchAction::SelectNext) => {
                if state.branches.branches.is_empty() {
                    log::debug!("No branches loaded, ignoring branch switch");
                    return false;
                }
                let next = (state.branches.selected + 1) % state.branches.branches.len();
                if next == state.branches.selected {
                    // Single branch, switching is a no-op
                    return false;
                }
                if let Some(branch) = state.branches.branches.get(next) {
                    dispatcher.dispatch(Action::Timeline(TimelineAction::Load {
                        branch: branch.name.clone(),
                    }));
                }
                true
            }
            Action::Timeline(TimelineAction::Load { branch }) => {
                self.load_commits(branch, state, dispatcher);
                // Let action pass through so the reducer clears the timeline
                true
            }
            Action::Timeline(TimelineAction::Loaded {
                request_id,
                commits,
            }) => {
                self.on_commits_loaded(*request_id, commits, state, dispatcher);
                true
            }
            _ => true,
        }
    }
}
