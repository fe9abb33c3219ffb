//! Repository history client trait and error taxonomy
//!
//! This module defines the core `RepoHistoryClient` trait that all client
//! implementations must satisfy, as well as the `ClientError` enum that
//! classifies every way a fetch can fail.

use crate::types::{Branch, Commit};
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by repository history fetches.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not complete (DNS failure, refused connection,
    /// timeout). Carries the underlying error message.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status code.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// The status code of the response (e.g., 404)
        status: u16,
    },

    /// The server answered successfully but with zero items where at least
    /// one was required (e.g., a repository with no branches).
    #[error("No {0} found")]
    EmptyResult(&'static str),
}

impl ClientError {
    /// True when the error is a missing-resource response (HTTP 404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::HttpStatus { status: 404 })
    }
}

/// Repository history client trait
///
/// Defines the two read-only fetches the revision browser performs.
/// Implementations must not retry on failure; the caller decides whether
/// and when to re-trigger a fetch.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait RepoHistoryClient: Send + Sync {
    /// Fetch the branches of a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// The branches in API order. Fails with `ClientError::HttpStatus` on a
    /// non-2xx response, `ClientError::Network` when the request could not
    /// complete, and `ClientError::EmptyResult` when the repository has no
    /// branches at all.
    async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, ClientError>;

    /// Fetch the commits that touched one file path on a branch
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `branch` - Branch name to walk
    /// * `path` - File path relative to the repository root
    ///
    /// # Returns
    ///
    /// Commits in API order (reverse-chronological, index 0 = latest),
    /// possibly empty. An empty list is not an error here: a branch that
    /// never touched the file is a valid "nothing to show" state, and the
    /// caller treats fetch failure and emptiness identically.
    async fn list_commits_for_path(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Vec<Commit>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = ClientError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP status 404");

        let err = ClientError::EmptyResult("branches");
        assert_eq!(err.to_string(), "No branches found");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::HttpStatus { status: 404 }.is_not_found());
        assert!(!ClientError::HttpStatus { status: 500 }.is_not_found());
        assert!(!ClientError::Network("timeout".to_string()).is_not_found());
    }
}
