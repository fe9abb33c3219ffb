//! Octocrab-based repository history client
//!
//! Direct implementation of the `RepoHistoryClient` trait using the octocrab
//! library. Both fetches go through octocrab's raw `get` with our own wire
//! types, since the commits route needs `path`/`sha` query parameters that
//! the typed builders do not cover for this use case.

use crate::client::{ClientError, RepoHistoryClient};
use crate::types::{Branch, BranchRecord, Commit, CommitRecord};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// One-shot fetch size; the browser never paginates past the first page
const PER_PAGE: u8 = 100;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[derive(Serialize)]
struct BranchesQuery {
    per_page: u8,
}

#[derive(Serialize)]
struct CommitsQuery<'a> {
    path: &'a str,
    sha: &'a str,
    per_page: u8,
}

#[async_trait]
impl RepoHistoryClient for OctocrabClient {
    async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, ClientError> {
        debug!("Fetching branches for {}/{}", owner, repo);

        let route = format!("/repos/{}/{}/branches", owner, repo);
        let records: Vec<BranchRecord> = self
            .octocrab
            .get(route, Some(&BranchesQuery { per_page: PER_PAGE }))
            .await
            .map_err(convert_error)?;

        if records.is_empty() {
            return Err(ClientError::EmptyResult("branches"));
        }

        debug!("Fetched {} branches for {}/{}", records.len(), owner, repo);
        Ok(records
            .into_iter()
            .map(|record| Branch { name: record.name })
            .collect())
    }

    async fn list_commits_for_path(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Vec<Commit>, ClientError> {
        debug!(
            "Fetching commits for {}/{} touching {} on {}",
            owner, repo, path, branch
        );

        let route = format!("/repos/{}/{}/commits", owner, repo);
        let query = CommitsQuery {
            path,
            sha: branch,
            per_page: PER_PAGE,
        };
        let records: Vec<CommitRecord> = self
            .octocrab
            .get(route, Some(&query))
            .await
            .map_err(convert_error)?;

        debug!(
            "Fetched {} commits for {}/{} on {}",
            records.len(),
            owner,
            repo,
            branch
        );
        Ok(records.into_iter().map(convert_commit).collect())
    }
}

/// Map an octocrab error onto the client error taxonomy
fn convert_error(err: octocrab::Error) -> ClientError {
    match err {
        octocrab::Error::GitHub { source, .. } => ClientError::HttpStatus {
            status: source.status_code.as_u16(),
        },
        other => ClientError::Network(other.to_string()),
    }
}

/// Convert a wire commit record to the domain Commit type
fn convert_commit(record: CommitRecord) -> Commit {
    let author = record.commit.author;
    Commit {
        sha: record.sha,
        message: record.commit.message,
        author_name: author
            .as_ref()
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        author_date: author
            .and_then(|a| a.date)
            .unwrap_or_else(chrono::Utc::now),
    }
}
