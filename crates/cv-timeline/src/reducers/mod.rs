//! Reducers
//!
//! Pure functions producing new state from current state plus an action.
//! Side effects never happen here; the middleware own those.

pub mod branches_reducer;
pub mod document_reducer;
pub mod status_bar_reducer;
pub mod timeline_reducer;

use crate::actions::{Action, GlobalAction};
use crate::state::AppState;

/// Root reducer, routing tagged actions to the matching sub-reducer
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            log::info!("Quit requested");
            state.running = false;
        }
        Action::Global(GlobalAction::ToggleHelp) => {
            state.show_help = !state.show_help;
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {
            // Translated by the keyboard middleware; nothing to reduce
        }
        Action::Branches(action) => {
            state.branches = branches_reducer::reduce_branches(state.branches, action);
        }
        Action::Timeline(action) => {
            state.timeline = timeline_reducer::reduce_timeline(state.timeline, action);
        }
        Action::Document(action) => {
            state.document = document_reducer::reduce_document(state.document, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, action);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_stops_the_application() {
        let state = AppState::default();
        assert!(state.running);

        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_toggle_help_flips_visibility() {
        let state = AppState::default();
        let state = reduce(state, &Action::Global(GlobalAction::ToggleHelp));
        assert!(state.show_help);

        let state = reduce(state, &Action::Global(GlobalAction::ToggleHelp));
        assert!(!state.show_help);
    }
}
