//! Branch strip reducer

use crate::actions::BranchAction;
use crate::domain_models::{default_branch_index, LoadingState};
use crate::state::BranchListState;

/// Reduce branch strip state
pub fn reduce_branches(mut state: BranchListState, action: &BranchAction) -> BranchListState {
    match action {
        BranchAction::Load => {
            state.loading_state = LoadingState::Loading;
        }
        BranchAction::Loaded(branches) => {
            state.selected = default_branch_index(branches);
            state.branches = branches.clone();
            state.loading_state = LoadingState::Loaded;
            log::info!(
                "Loaded {} branches, selected {:?}",
                state.branches.len(),
                state.selected_name()
            );
        }
        BranchAction::LoadError(error) => {
            state.loading_state = LoadingState::Error(error.clone());
            log::error!("Failed to load branches: {}", error);
        }
        BranchAction::SelectNext => {
            if !state.branches.is_empty() {
                let next = (state.selected + 1) % state.branches.len();
                if next != state.selected {
                    state.selected = next;
                    log::debug!("Selected branch {:?}", state.selected_name());
                }
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_history_client::Branch;
    use pretty_assertions::assert_eq;

    fn branch(name: &str) -> Branch {
        Branch {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_loaded_selects_the_default_branch() {
        let state = BranchListState::default();
        let branches = vec![branch("gh-pages"), branch("main"), branch("develop")];

        let state = reduce_branches(state, &BranchAction::Loaded(branches));

        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_name(), Some("main"));
        assert_eq!(state.loading_state, LoadingState::Loaded);
    }

    #[test]
    fn test_select_next_wraps_around() {
        let mut state = BranchListState::default();
        state.branches = vec![branch("main"), branch("develop")];
        state.selected = 1;

        let state = reduce_branches(state, &BranchAction::SelectNext);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_select_next_with_single_branch_is_a_noop() {
        let mut state = BranchListState::default();
        state.branches = vec![branch("main")];

        let state = reduce_branches(state, &BranchAction::SelectNext);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_select_next_with_no_branches_is_a_noop() {
        let state = reduce_branches(BranchListState::default(), &BranchAction::SelectNext);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_load_error_is_recorded() {
        let state = reduce_branches(
            BranchListState::default(),
            &BranchAction::LoadError("boom".to_string()),
        );
        assert_eq!(state.loading_state, LoadingState::Error("boom".to_string()));
    }
}
