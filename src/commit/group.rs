//! Grouping classified commits into changelog sections.

use serde::{Deserialize, Serialize};

use super::CommitRecord;

/// A named changelog group with its commits in original log order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitGroup {
    pub title: String,
    pub commits: Vec<CommitRecord>,
}

impl CommitGroup {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            commits: Vec::new(),
        }
    }
}

/// Partition commits into the fixed group set by exact type match.
///
/// `fix` commits become Bugfixes, `feat` commits become Features; everything
/// else (including uncategorized commits with an empty type) is dropped from
/// the rendered output. Group order is fixed — Bugfixes before Features — and
/// a group with no commits is still emitted so quiet releases keep their
/// document structure.
pub fn group_commits(commits: Vec<CommitRecord>) -> Vec<CommitGroup> {
    let mut bug_group = CommitGroup::new("Bugfixes");
    let mut feat_group = CommitGroup::new("Features");

    for commit in commits {
        match commit.commit_type.as_str() {
            "fix" => bug_group.commits.push(commit),
            "feat" => feat_group.commits.push(commit),
            _ => {}
        }
    }

    vec![bug_group, feat_group]
}
