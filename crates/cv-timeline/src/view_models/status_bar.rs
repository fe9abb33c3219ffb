//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use ratatui::style::{Color, Modifier, Style};

use crate::state::{AppState, StatusKind};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Emoji/icon for the status
    pub emoji: &'static str,
    /// The message text
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Domain the message came from
    pub source: String,
    /// Foreground style (color based on kind)
    pub message_style: Style,
    /// Background color for the bar
    pub bg_color: Color,
    /// Style for metadata (timestamp, source)
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        if let Some(msg) = state.status_bar.latest() {
            let fg_color = match msg.kind {
                StatusKind::Running => theme.status_running,
                StatusKind::Success => theme.status_success,
                StatusKind::Error => theme.status_error,
                StatusKind::Warning => theme.status_warning,
                StatusKind::Info => theme.status_info,
            };

            Self {
                emoji: msg.kind.emoji(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.clone(),
                message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                bg_color: theme.bg_secondary,
                metadata_style: Style::default().fg(theme.text_muted),
            }
        } else {
            // Welcome message until the first status arrives
            Self {
                emoji: "📄",
                message: "cv-timeline - press ? for key bindings".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_secondary,
                metadata_style: Style::default().fg(theme.text_muted),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;

    #[test]
    fn test_latest_message_drives_the_bar() {
        let mut state = AppState::default();
        state.status_bar.push(StatusMessage::new(
            StatusKind::Error,
            "Failed to load branches".to_string(),
            "Branches".to_string(),
        ));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Failed to load branches");
        assert_eq!(vm.source, "Branches");
        assert_eq!(vm.emoji, "❌");
    }

    #[test]
    fn test_empty_history_shows_the_welcome_message() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert!(vm.message.contains("cv-timeline"));
        assert!(vm.timestamp.is_empty());
    }
}
