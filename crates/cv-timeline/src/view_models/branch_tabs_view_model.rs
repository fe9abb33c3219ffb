//! Branch Tabs View Model
//!
//! Pre-computes presentation data for the branch strip at the top of the
//! screen.

use ratatui::style::{Color, Style};

use crate::domain_models::{BranchCategory, LoadingState};
use crate::state::AppState;
use crate::view_models::category_color;

/// View model for the branch strip
#[derive(Debug, Clone)]
pub struct BranchTabsViewModel {
    /// Background color for the whole row
    pub line_bg: Color,
    /// Style for the leading application title
    pub title_style: Style,
    /// One tab per branch, in API order
    pub tabs: Vec<BranchTabViewModel>,
    /// Shown after the tabs while loading or on failure
    pub status: Option<(String, Style)>,
}

/// One branch tab
#[derive(Debug, Clone)]
pub struct BranchTabViewModel {
    pub name: String,
    pub style: Style,
}

impl BranchTabsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        let tabs = state
            .branches
            .branches
            .iter()
            .enumerate()
            .map(|(index, branch)| {
                let category = BranchCategory::classify(&branch.name);
                let color = category_color(theme, category);
                let style = if index == state.branches.selected {
                    theme.badge(color)
                } else {
                    Style::default().fg(color)
                };
                BranchTabViewModel {
                    name: branch.name.clone(),
                    style,
                }
            })
            .collect();

        let status = match &state.branches.loading_state {
            LoadingState::Loading => Some(("loading branches...".to_string(), theme.muted())),
            LoadingState::Error(error) => Some((error.clone(), theme.error())),
            LoadingState::Idle | LoadingState::Loaded => None,
        };

        Self {
            line_bg: theme.bg_secondary,
            title_style: theme.key_hint(),
            tabs,
            status,
        }
    }
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
    fn test_selected_tab_is_badged_in_its_category_color() {
        let mut state = AppState::default();
        state.branches.branches = vec![branch("main"), branch("feature-x")];
        state.branches.selected = 0;
        state.branches.loading_state = LoadingState::Loaded;

        let vm = BranchTabsViewModel::from_state(&state);

        assert_eq!(vm.tabs.len(), 2);
        assert_eq!(vm.tabs[0].style, state.theme.badge(state.theme.category_main));
        assert_eq!(
            vm.tabs[1].style,
            Style::default().fg(state.theme.category_feature)
        );
        assert!(vm.status.is_none());
    }

    #[test]
    fn test_fetch_errors_show_after_the_tabs() {
        let mut state = AppState::default();
        state.branches.loading_state = LoadingState::Error("Network error".to_string());

        let vm = BranchTabsViewModel::from_state(&state);

        assert!(vm.tabs.is_empty());
        let (message, _) = vm.status.unwrap();
        assert_eq!(message, "Network error");
    }
}
