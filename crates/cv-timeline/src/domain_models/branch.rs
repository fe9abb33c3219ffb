//! Branch classification
//!
//! Branch names drive the visual grouping of the branch strip and the
//! timeline: every branch falls into exactly one category, and the category
//! picks the accent color for its entries.

use gh_history_client::Branch;
use strum::Display;

/// Style category derived from a branch name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BranchCategory {
    /// The repository mainline ("main" or "master")
    Main,
    /// Integration branches (name contains "develop")
    Develop,
    /// Feature branches (name contains "feat" or "feature")
    Feature,
    /// Everything else
    Default,
}

impl BranchCategory {
    /// Classify a branch name.
    ///
    /// Matching is case-insensitive. Exact mainline names win before the
    /// substring rules, so "MASTER" is mainline rather than a fallthrough.
    pub fn classify(branch_name: &str) -> Self {
        let lowered = branch_name.to_lowercase();
        if lowered == "main" || lowered == "master" {
            Self::Main
        } else if lowered.contains("develop") {
            Self::Develop
        } else if lowered.contains("feat") {
            // "feat" also covers "feature"
            Self::Feature
        } else {
            Self::Default
        }
    }
}

/// Index of the branch to select when the list first loads.
///
/// Prefers "main", then "master", then the first branch in the list.
pub fn default_branch_index(branches: &[Branch]) -> usize {
    branches
        .iter()
        .position(|b| b.name == "main")
        .or_else(|| branches.iter().position(|b| b.name == "master"))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn branch(name: &str) -> Branch {
        Branch {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_classify_mainline_names() {
        assert_eq!(BranchCategory::classify("main"), BranchCategory::Main);
        assert_eq!(BranchCategory::classify("master"), BranchCategory::Main);
        assert_eq!(BranchCategory::classify("MASTER"), BranchCategory::Main);
    }

    #[test]
    fn test_classify_develop_substring() {
        assert_eq!(
            BranchCategory::classify("develop"),
            BranchCategory::Develop
        );
        assert_eq!(
            BranchCategory::classify("my-develop-branch"),
            BranchCategory::Develop
        );
    }

    #[test]
    fn test_classify_feature_substring() {
        assert_eq!(
            BranchCategory::classify("feature-x"),
            BranchCategory::Feature
        );
        assert_eq!(
            BranchCategory::classify("feat/new-layout"),
            BranchCategory::Feature
        );
    }

    #[test]
    fn test_classify_falls_back_to_default() {
        assert_eq!(BranchCategory::classify("hotfix"), BranchCategory::Default);
        assert_eq!(
            BranchCategory::classify("release-1.0"),
            BranchCategory::Default
        );
    }

    #[test]
    fn test_exact_mainline_wins_before_substrings() {
        // A name that is exactly a mainline name never falls through to the
        // substring rules, even when cased differently.
        assert_eq!(BranchCategory::classify("Main"), BranchCategory::Main);
        // Substring rules only apply to non-mainline names.
        assert_eq!(
            BranchCategory::classify("main-develop"),
            BranchCategory::Develop
        );
    }

    #[test]
    fn test_default_branch_prefers_main() {
        let branches = vec![branch("gh-pages"), branch("master"), branch("main")];
        assert_eq!(default_branch_index(&branches), 2);
    }

    #[test]
    fn test_default_branch_falls_back_to_master() {
        let branches = vec![branch("gh-pages"), branch("master")];
        assert_eq!(default_branch_index(&branches), 1);
    }

    #[test]
    fn test_default_branch_falls_back_to_first() {
        let branches = vec![branch("trunk"), branch("gh-pages")];
        assert_eq!(default_branch_index(&branches), 0);
    }
}
