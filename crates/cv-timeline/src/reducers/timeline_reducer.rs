//! Revision timeline reducer

use crate::actions::TimelineAction;
use crate::domain_models::LoadingState;
use crate::state::TimelineState;

/// Reduce revision timeline state.
///
/// Fetch completions carry the request id they started with. Only the newest
/// request counts; completions for superseded fetches are discarded, so a
/// slow fetch for a previously selected branch can never overwrite the
/// timeline of the current one.
pub fn reduce_timeline(mut state: TimelineState, action: &TimelineAction) -> TimelineState {
    match action {
        TimelineAction::Load { branch } => {
            // A branch switch replaces the timeline wholesale
            state.revisions.clear();
            state.cursor = 0;
            state.active = None;
            state.loading_state = LoadingState::Loading;
            log::debug!("Timeline cleared, loading history for {}", branch);
        }
        TimelineAction::LoadStart { request_id } => {
            state.request_id = *request_id;
        }
        TimelineAction::Loaded {
            request_id,
            commits,
        } => {
            if *request_id != state.request_id {
                log::debug!(
                    "Discarding stale commit fetch {} (newest is {})",
                    request_id,
                    state.request_id
                );
                return state;
            }
            state.cursor = 0;
            state.active = if commits.is_empty() { None } else { Some(0) };
            state.revisions = commits.clone();
            state.loading_state = LoadingState::Loaded;
            log::info!("Loaded {} revisions", state.revisions.len());
        }
        TimelineAction::LoadError { request_id, error } => {
            if *request_id != state.request_id {
                log::debug!("Discarding stale commit fetch error {}", request_id);
                return state;
            }
            state.loading_state = LoadingState::Error(error.clone());
            log::error!("Failed to load revisions: {}", error);
        }
        TimelineAction::NavigateNext => {
            if !state.revisions.is_empty() {
                state.cursor = (state.cursor + 1) % state.revisions.len();
            }
        }
        TimelineAction::NavigatePrevious => {
            if !state.revisions.is_empty() {
                state.cursor = if state.cursor == 0 {
                    state.revisions.len() - 1
                } else {
                    state.cursor - 1
                };
            }
        }
        TimelineAction::NavigateToTop => {
            state.cursor = 0;
        }
        TimelineAction::NavigateToBottom => {
            if !state.revisions.is_empty() {
                state.cursor = state.revisions.len() - 1;
            }
        }
        TimelineAction::Activate { index } => {
            if *index < state.revisions.len() && state.active != Some(*index) {
                state.active = Some(*index);
                log::debug!("Activated revision at index {}", index);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gh_history_client::Commit;
    use pretty_assertions::assert_eq;

    fn commit(sha: &str) -> Commit {
        Commit {
            sha: sha.to_string(),
            message: format!("commit {sha}"),
            author_name: "Renan".to_string(),
            author_date: Utc::now(),
        }
    }

    fn loaded(request_id: u64, shas: &[&str]) -> TimelineAction {
        TimelineAction::Loaded {
            request_id,
            commits: shas.iter().map(|sha| commit(sha)).collect(),
        }
    }

    #[test]
    fn test_loaded_activates_the_newest_revision() {
        let mut state = TimelineState::default();
        state.request_id = 1;

        let state = reduce_timeline(state, &loaded(1, &["aaa", "bbb", "ccc"]));

        assert_eq!(state.active, Some(0));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.revisions.len(), 3);
        assert_eq!(state.loading_state, LoadingState::Loaded);
    }

    #[test]
    fn test_loaded_with_no_commits_leaves_nothing_active() {
        let mut state = TimelineState::default();
        state.request_id = 1;

        let state = reduce_timeline(state, &loaded(1, &[]));

        assert_eq!(state.active, None);
        assert!(state.revisions.is_empty());
        assert_eq!(state.loading_state, LoadingState::Loaded);
    }

    #[test]
    fn test_stale_loaded_is_discarded() {
        let mut state = TimelineState::default();
        state.request_id = 2;
        let state = reduce_timeline(state, &loaded(2, &["fresh"]));

        // A fetch started before the current one completes late
        let state = reduce_timeline(state, &loaded(1, &["stale1", "stale2"]));

        assert_eq!(state.revisions.len(), 1);
        assert_eq!(state.revisions[0].sha, "fresh");
    }

    #[test]
    fn test_stale_error_is_discarded() {
        let mut state = TimelineState::default();
        state.request_id = 2;
        let state = reduce_timeline(state, &loaded(2, &["fresh"]));

        let state = reduce_timeline(
            state,
            &TimelineAction::LoadError {
                request_id: 1,
                error: "timeout".to_string(),
            },
        );

        assert_eq!(state.loading_state, LoadingState::Loaded);
    }

    #[test]
    fn test_load_clears_the_previous_timeline() {
        let mut state = TimelineState::default();
        state.request_id = 1;
        let state = reduce_timeline(state, &loaded(1, &["aaa", "bbb"]));

        let state = reduce_timeline(
            state,
            &TimelineAction::Load {
                branch: "develop".to_string(),
            },
        );

        assert!(state.revisions.is_empty());
        assert_eq!(state.active, None);
        assert_eq!(state.loading_state, LoadingState::Loading);
    }

    #[test]
    fn test_navigation_wraps_in_both_directions() {
        let mut state = TimelineState::default();
        state.request_id = 1;
        let state = reduce_timeline(state, &loaded(1, &["aaa", "bbb", "ccc"]));

        let state = reduce_timeline(state, &TimelineAction::NavigatePrevious);
        assert_eq!(state.cursor, 2);

        let state = reduce_timeline(state, &TimelineAction::NavigateNext);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_navigation_on_empty_timeline_is_a_noop() {
        let state = reduce_timeline(TimelineState::default(), &TimelineAction::NavigateNext);
        assert_eq!(state.cursor, 0);

        let state = reduce_timeline(state, &TimelineAction::NavigateToBottom);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_activation_moves_to_exactly_one_revision() {
        let mut state = TimelineState::default();
        state.request_id = 1;
        let state = reduce_timeline(state, &loaded(1, &["aaa", "bbb", "ccc"]));
        assert_eq!(state.active, Some(0));

        let state = reduce_timeline(state, &TimelineAction::Activate { index: 2 });
        assert_eq!(state.active, Some(2));
    }

    #[test]
    fn test_activation_out_of_range_is_a_noop() {
        let mut state = TimelineState::default();
        state.request_id = 1;
        let state = reduce_timeline(state, &loaded(1, &["aaa"]));

        let state = reduce_timeline(state, &TimelineAction::Activate { index: 5 });
        assert_eq!(state.active, Some(0));
    }
}
