//! GitHub API data transfer objects
//!
//! Domain types returned by the client, plus the raw wire shapes they are
//! parsed from. The wire structs mirror only the JSON fields this crate
//! reads; everything else in the API response is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A branch of the tracked repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name (e.g., "main", "feature/photo")
    pub name: String,
}

/// One revision of the tracked file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit SHA (unique, stable identifier)
    pub sha: String,

    /// Commit message as authored
    pub message: String,

    /// Author's display name
    pub author_name: String,

    /// When the commit was authored
    pub author_date: DateTime<Utc>,
}

impl Commit {
    /// The sha's first 7 characters, the customary short form
    pub fn short_sha(&self) -> &str {
        if self.sha.len() >= 7 {
            &self.sha[..7]
        } else {
            &self.sha
        }
    }
}

/// Wire shape of one entry in `GET /repos/{owner}/{repo}/branches`
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRecord {
    /// Branch name
    pub name: String,
}

/// Wire shape of one entry in `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    /// Full commit SHA
    pub sha: String,

    /// Nested commit detail object
    pub commit: CommitDetail,
}

/// Wire shape of the nested `commit` object
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    /// Commit message
    pub message: String,

    /// Author signature (null for commits with no author data)
    pub author: Option<CommitSignature>,
}

/// Wire shape of the nested `commit.author` object
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    /// Author name (null when GitHub could not resolve one)
    pub name: Option<String>,

    /// Author date
    pub date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha() {
        let commit = Commit {
            sha: "abc1234def5678".to_string(),
            message: "Update resume".to_string(),
            author_name: "A".to_string(),
            author_date: Utc::now(),
        };
        assert_eq!(commit.short_sha(), "abc1234");
    }

    #[test]
    fn test_short_sha_shorter_than_seven() {
        let commit = Commit {
            sha: "abc".to_string(),
            message: String::new(),
            author_name: String::new(),
            author_date: Utc::now(),
        };
        assert_eq!(commit.short_sha(), "abc");
    }

    #[test]
    fn test_branch_record_ignores_extra_fields() {
        let json = r#"{"name": "main", "commit": {"sha": "x"}, "protected": false}"#;
        let record: BranchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "main");
    }

    #[test]
    fn test_commit_record_deserialize() {
        let json = r#"{
            "sha": "abc1234def",
            "commit": {
                "message": "Update resume v2",
                "author": {"name": "A", "date": "2024-01-10T10:00:00Z"},
                "committer": {"name": "GitHub", "date": "2024-01-10T10:00:00Z"}
            },
            "html_url": "https://github.com/o/r/commit/abc1234def"
        }"#;
        let record: CommitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sha, "abc1234def");
        assert_eq!(record.commit.message, "Update resume v2");
        let author = record.commit.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("A"));
        assert!(author.date.is_some());
    }

    #[test]
    fn test_commit_record_null_author() {
        let json = r#"{"sha": "abc", "commit": {"message": "m", "author": null}}"#;
        let record: CommitRecord = serde_json::from_str(json).unwrap();
        assert!(record.commit.author.is_none());
    }
}
