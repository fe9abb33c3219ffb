//! Views
//!
//! Pure presentation. Each pane builds its view model from the state
//! snapshot and draws it; nothing here mutates application state. The one
//! piece of mutable rendering state is the [`PageImageSurface`] the
//! document pane encodes terminal graphics into, owned by the draw loop.

pub mod branch_tabs_view;
pub mod document_view;
pub mod help_view;
pub mod page_image;
pub mod status_bar;
pub mod timeline_view;

pub use page_image::PageImageSurface;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::state::AppState;
use crate::view_models::{BranchTabsViewModel, StatusBarViewModel};
use crate::views::branch_tabs_view::BranchTabsWidget;
use crate::views::status_bar::StatusBarWidget;

/// Render the entire application UI
pub fn render(state: &AppState, surface: &mut PageImageSurface, f: &mut Frame) {
    let area = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Branch tabs
            Constraint::Min(0),    // Timeline + document panes
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let tabs_vm = BranchTabsViewModel::from_state(state);
    f.render_widget(BranchTabsWidget(&tabs_vm), rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    timeline_view::render(state, panes[0], f);
    document_view::render(state, surface, panes[1], f);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), rows[2]);

    // Overlays render last so they draw on top of the panes
    if state.show_help {
        help_view::render(state, area, f);
    }
}
