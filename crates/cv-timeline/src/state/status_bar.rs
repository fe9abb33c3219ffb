//! Status bar state

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation in flight
    Running,
    /// Operation completed
    Success,
    /// Operation failed
    Error,
    /// Unexpected but not fatal
    Warning,
    /// Neutral information
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// One entry in the status history
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// When the message was pushed
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Domain that pushed the message
    pub source: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: String, source: String) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message,
            source,
        }
    }
}

/// Status bar state: a bounded history of messages, newest last
#[derive(Debug, Clone)]
pub struct StatusBarState {
    messages: VecDeque<StatusMessage>,
    max_history: usize,
}

impl StatusBarState {
    /// The message the bar displays
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Append a message, dropping the oldest once the history is full
    pub fn push(&mut self, message: StatusMessage) {
        if self.messages.len() >= self.max_history {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_returns_newest_message() {
        let mut state = StatusBarState::default();
        state.push(StatusMessage::new(
            StatusKind::Running,
            "first".to_string(),
            "Test".to_string(),
        ));
        state.push(StatusMessage::new(
            StatusKind::Success,
            "second".to_string(),
            "Test".to_string(),
        ));

        let latest = state.latest().unwrap();
        assert_eq!(latest.message, "second");
        assert_eq!(latest.kind, StatusKind::Success);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut state = StatusBarState::default();
        for i in 0..150 {
            state.push(StatusMessage::new(
                StatusKind::Info,
                format!("message {i}"),
                "Test".to_string(),
            ));
        }

        assert_eq!(state.messages.len(), 100);
        assert_eq!(state.messages.front().unwrap().message, "message 50");
        assert_eq!(state.latest().unwrap().message, "message 149");
    }

    #[test]
    fn test_clear_empties_the_history() {
        let mut state = StatusBarState::default();
        state.push(StatusMessage::new(
            StatusKind::Info,
            "something".to_string(),
            "Test".to_string(),
        ));
        state.clear();
        assert!(state.latest().is_none());
    }
}
