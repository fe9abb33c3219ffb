//! Root application state

use cv_timeline_config::AppConfig;

use super::{BranchListState, DocumentState, StatusBarState, TimelineState};
use crate::theme::Theme;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// False once the user quits; the main loop exits on the next pass
    pub running: bool,
    /// Key bindings overlay visibility
    pub show_help: bool,
    /// Branch strip
    pub branches: BranchListState,
    /// Revision timeline for the selected branch
    pub timeline: TimelineState,
    /// Document pane
    pub document: DocumentState,
    /// Status bar history
    pub status_bar: StatusBarState,
    /// Color theme
    pub theme: Theme,
    /// Repository coordinates and endpoints
    pub app_config: AppConfig,
}

impl AppState {
    pub fn with_config(app_config: AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            show_help: false,
            branches: BranchListState::default(),
            timeline: TimelineState::default(),
            document: DocumentState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            app_config: AppConfig::default(),
        }
    }
}
