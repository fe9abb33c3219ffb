//! View models
//!
//! Pre-computed presentation data, rebuilt from a state snapshot on every
//! frame. Truncation, date formatting and color choices all happen here so
//! the views only place spans.

pub mod branch_tabs_view_model;
pub mod document_view_model;
pub mod status_bar;
pub mod timeline_view_model;

pub use branch_tabs_view_model::{BranchTabViewModel, BranchTabsViewModel};
pub use document_view_model::{DocumentContent, DocumentViewModel};
pub use status_bar::StatusBarViewModel;
pub use timeline_view_model::{TimelineEntryViewModel, TimelineViewModel};

use ratatui::style::Color;

use crate::domain_models::BranchCategory;
use crate::theme::Theme;

/// Accent color for a branch category
pub(crate) fn category_color(theme: &Theme, category: BranchCategory) -> Color {
    match category {
        BranchCategory::Main => theme.category_main,
        BranchCategory::Develop => theme.category_develop,
        BranchCategory::Feature => theme.category_feature,
        BranchCategory::Default => theme.category_default,
    }
}
