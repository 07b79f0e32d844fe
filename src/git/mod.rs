//! Read-only VCS queries, consumed through the git binary's text output.

pub mod cli;

pub use cli::{SystemGit, check_git_installed};

use crate::error::GitError;

/// The four read-only git queries the pipeline depends on.
///
/// Injected as a capability so the classifier and scope inferencer can be
/// tested against an in-memory fake instead of a real repository.
pub trait GitCli {
    /// Commit id of the most recent tag in the repository.
    fn latest_tag_commit(&self) -> Result<String, GitError>;

    /// Human-readable tag name for a commit.
    fn tag_name(&self, commit: &str) -> Result<String, GitError>;

    /// Log of commits since `tag`, formatted with the given pretty format.
    fn log_since(&self, tag: &str, format: &str) -> Result<String, GitError>;

    /// File paths changed by a single commit (tree-diff against its parents,
    /// names only, recursive).
    fn changed_files(&self, commit: &str) -> Result<Vec<String>, GitError>;
}
