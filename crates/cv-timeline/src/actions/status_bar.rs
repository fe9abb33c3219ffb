//! Status bar actions

use crate::state::StatusKind;

/// Actions for the status bar
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Append a message to the status history
    Push {
        kind: StatusKind,
        message: String,
        source: String,
    },
    /// Clear the status history
    Clear,
}

impl StatusBarAction {
    /// An operation is in flight
    pub fn running(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Running,
            message: message.into(),
            source: source.into(),
        }
    }

    /// An operation finished successfully
    pub fn success(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Success,
            message: message.into(),
            source: source.into(),
        }
    }

    /// An operation failed
    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Error,
            message: message.into(),
            source: source.into(),
        }
    }

    /// Something unexpected but not fatal
    pub fn warning(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Warning,
            message: message.into(),
            source: source.into(),
        }
    }

    /// Neutral information
    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Info,
            message: message.into(),
            source: source.into(),
        }
    }
}
