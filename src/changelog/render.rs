//! Render grouped commits into a changelog text fragment.

use serde::{Deserialize, Serialize};

use crate::commit::CommitGroup;

/// Version and date for the section being released.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub version: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
}

/// Render the new section: a version heading, one heading per group, and one
/// bullet per commit carrying type, scope, subject, and author.
///
/// Groups are rendered in the order given, including empty ones, so quiet
/// releases still produce the full section skeleton.
pub fn render_fragment(meta: &ReleaseMetadata, groups: &[CommitGroup]) -> String {
    let mut fragment = format!("## {} [{}]\n", meta.version, meta.date);

    for group in groups {
        fragment.push_str(&format!("\n### {}\n", group.title));

        if !group.commits.is_empty() {
            fragment.push('\n');
        }
        for commit in &group.commits {
            if commit.scope.is_empty() {
                fragment.push_str(&format!(
                    "- {}: {} ({})\n",
                    commit.commit_type, commit.subject, commit.author_name
                ));
            } else {
                fragment.push_str(&format!(
                    "- {}({}): {} ({})\n",
                    commit.commit_type, commit.scope, commit.subject, commit.author_name
                ));
            }
        }
    }

    fragment
}
