//! Timeline View Model
//!
//! Pre-computes presentation data for the revision timeline. The timeline is
//! rebuilt wholesale from the commit list on every frame; nothing here is
//! incremental.

use chrono::{DateTime, Local};
use gh_history_client::Commit;
use ratatui::style::{Color, Modifier, Style};

use crate::domain_models::{BranchCategory, LoadingState};
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::category_color;

/// Commit messages longer than this many characters get truncated
const MESSAGE_CAP: usize = 60;

/// View model for the revision timeline pane
#[derive(Debug, Clone)]
pub struct TimelineViewModel {
    /// Accent color of the selected branch's category
    pub accent: Color,
    /// Display-ready entries, newest first
    pub entries: Vec<TimelineEntryViewModel>,
    /// Shown instead of entries while loading, on error, or when empty
    pub placeholder: Option<(String, Style)>,
    /// Index of the entry under the cursor
    pub cursor: usize,
}

/// One display-ready timeline entry
#[derive(Debug, Clone)]
pub struct TimelineEntryViewModel {
    /// Commit message, capped at 60 characters with a "..." suffix
    pub message: String,
    /// Author name
    pub author: String,
    /// Commit date in local time, e.g. "Jan 10, 2024 at 10:00 AM"
    pub date: String,
    /// First 7 characters of the sha
    pub short_sha: String,
    /// Only the newest entry carries the Latest badge
    pub latest: bool,
    /// Entry is the revision the document pane shows
    pub active: bool,
    pub message_style: Style,
    pub meta_style: Style,
    /// Style of the entry marker, accent-colored per branch category
    pub marker_style: Style,
    /// Style of the Latest badge
    pub badge_style: Style,
}

impl TimelineViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let branch_name = state.branches.selected_name().unwrap_or("");
        let category = BranchCategory::classify(branch_name);
        let accent = category_color(theme, category);

        let placeholder = match &state.timeline.loading_state {
            LoadingState::Idle => Some(("Waiting for branch list...".to_string(), theme.muted())),
            LoadingState::Loading => Some(("Loading revisions...".to_string(), theme.muted())),
            LoadingState::Error(error) => Some((error.clone(), theme.error())),
            LoadingState::Loaded if state.timeline.revisions.is_empty() => Some((
                "No commits found for this branch.".to_string(),
                theme.muted(),
            )),
            LoadingState::Loaded => None,
        };

        let entries = state
            .timeline
            .revisions
            .iter()
            .enumerate()
            .map(|(index, commit)| {
                TimelineEntryViewModel::from_commit(commit, index, state.timeline.active, accent, theme)
            })
            .collect();

        Self {
            accent,
            entries,
            placeholder,
            cursor: state.timeline.cursor,
        }
    }
}

impl TimelineEntryViewModel {
    fn from_commit(
        commit: &Commit,
        index: usize,
        active: Option<usize>,
        accent: Color,
        theme: &Theme,
    ) -> Self {
        let is_active = active == Some(index);
        Self {
            message: truncate_message(&commit.message),
            author: commit.author_name.clone(),
            date: format_local_date(commit.author_date.with_timezone(&Local)),
            short_sha: commit.short_sha().to_string(),
            latest: index == 0,
            active: is_active,
            message_style: if is_active {
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme.text()
            },
            meta_style: theme.muted(),
            marker_style: Style::default().fg(accent),
            badge_style: theme.badge(accent),
        }
    }
}

/// Cap a commit message at 60 characters, appending "..." when truncated.
///
/// Counts characters, not bytes, so multi-byte messages never get split
/// inside a character.
fn truncate_message(message: &str) -> String {
    if message.chars().count() > MESSAGE_CAP {
        let capped: String = message.chars().take(MESSAGE_CAP).collect();
        format!("{}...", capped)
    } else {
        message.to_string()
    }
}

/// Format a commit date the way the timeline shows it
pub(crate) fn format_local_date(date: DateTime<Local>) -> String {
    date.format("%b %-d, %Y at %-I:%M %p").to_string()
}
