//! chronik - A CLI tool that builds a categorized changelog section from conventional commits.
//!
//! # Overview
//!
//! chronik reads the commit log since the most recent tag, classifies each
//! commit by the conventional-commit grammar (inferring a missing scope from
//! the files the commit touched), groups the results into Bugfixes and
//! Features, and splices the rendered section into CHANGELOG.md without
//! touching anything written for earlier releases.

pub mod changelog;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod version;

// Re-export commonly used types
pub use changelog::{ReleaseMetadata, merge, merge_into_file, render_fragment};
pub use commit::{CommitGroup, CommitRecord, classify, group_commits, is_ignored, split_records};
pub use config::Config;
pub use error::{ChangelogError, CommitError, GitError, VersionError};
pub use git::{GitCli, SystemGit};
