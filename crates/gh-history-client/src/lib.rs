//! GitHub API client for browsing the revision history of a single file
//!
//! This crate provides a trait-based client for the two read-only REST
//! endpoints the revision browser needs: the branch list of a repository and
//! the commits touching one tracked file path on a branch. It also owns the
//! raw-file and hosted-viewer URL constructors, since both are pure functions
//! of (owner, repo, sha, path).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            RepoHistoryClient trait               │
//! │  - list_branches()                               │
//! │  - list_commits_for_path()                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │ OctocrabClient  │
//!               │ (direct API)    │
//!               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_history_client::{OctocrabClient, RepoHistoryClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder().build()?;
//! let client = OctocrabClient::new(Arc::new(octocrab));
//!
//! let branches = client.list_branches("renanbazinin", "CV-RENAN").await?;
//! let commits = client
//!     .list_commits_for_path("renanbazinin", "CV-RENAN", &branches[0].name, "CV-RenanBazinin.pdf")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;
pub mod urls;

/// Default raw file host (public GitHub)
pub const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";

pub use client::{ClientError, RepoHistoryClient};
pub use octocrab_client::OctocrabClient;
pub use types::{Branch, Commit};
pub use urls::{encode_uri_component, raw_file_url, viewer_url};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
