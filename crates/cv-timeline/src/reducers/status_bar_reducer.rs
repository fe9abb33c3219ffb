//! Status bar reducer

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

/// Reduce status bar state
pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push {
            kind,
            message,
            source,
        } => {
            state.push(StatusMessage::new(*kind, message.clone(), source.clone()));
        }
        StatusBarAction::Clear => {
            state.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;

    #[test]
    fn test_push_appends_to_the_history() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::running("Loading branches...", "Branches"),
        );

        let latest = state.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Running);
        assert_eq!(latest.message, "Loading branches...");
        assert_eq!(latest.source, "Branches");
    }

    #[test]
    fn test_clear_empties_the_history() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::info("hello", "Test"),
        );
        let state = reduce_status_bar(state, &StatusBarAction::Clear);
        assert!(state.latest().is_none());
    }
}
