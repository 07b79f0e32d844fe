//! Commit-record extraction and classification.
//!
//! The raw log dump flows through the tokenizer into per-record field maps,
//! the classifier turns each map into a [`CommitRecord`] (inferring a missing
//! scope from changed file paths), the ignore filter drops noisy commits, and
//! the grouper partitions what remains into named changelog groups.

pub mod classifier;
pub mod filter;
pub mod group;
pub mod scope;
pub mod tokenizer;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use classifier::{SubjectParts, classify, parse_subject};
pub use filter::is_ignored;
pub use group::{CommitGroup, group_commits};
pub use scope::infer_scope;
pub use tokenizer::split_records;

/// Ephemeral field-name to raw-value mapping for one log record.
pub type RawFieldSet = HashMap<String, String>;

/// One classified commit.
///
/// `commit_type` and `scope` are empty when the subject did not match the
/// conventional-commit grammar; such commits are dropped by the grouper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author_name: String,
    pub commit_type: String,
    pub scope: String,
    pub subject: String,
}
