//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::HashMap;

use chronik::config::Config;
use chronik::error::GitError;
use chronik::git::GitCli;

/// In-memory GitCli fake backed by canned query results.
pub struct FakeGit {
    pub tag_commit: String,
    pub tag: String,
    pub log: String,
    pub changed_files: HashMap<String, Vec<String>>,
}

impl FakeGit {
    pub fn new(log: impl Into<String>) -> Self {
        Self {
            tag_commit: "deadbeef".to_string(),
            tag: "v1.0.0".to_string(),
            log: log.into(),
            changed_files: HashMap::new(),
        }
    }

    /// Register the changed-file listing returned for one commit hash.
    pub fn with_changed_files(mut self, hash: &str, files: &[&str]) -> Self {
        self.changed_files
            .insert(hash.to_string(), files.iter().map(|s| s.to_string()).collect());
        self
    }
}

impl GitCli for FakeGit {
    fn latest_tag_commit(&self) -> Result<String, GitError> {
        Ok(self.tag_commit.clone())
    }

    fn tag_name(&self, _commit: &str) -> Result<String, GitError> {
        Ok(self.tag.clone())
    }

    fn log_since(&self, _tag: &str, _format: &str) -> Result<String, GitError> {
        Ok(self.log.clone())
    }

    fn changed_files(&self, commit: &str) -> Result<Vec<String>, GitError> {
        Ok(self.changed_files.get(commit).cloned().unwrap_or_default())
    }
}

/// Format one log record the way the log query would, using the default markers.
pub fn log_record(hash: &str, author: &str, subject: &str, body: &str) -> String {
    let config = Config::default();
    format!(
        "{}HASH:{}{d}AUTHOR:{}{d}SUBJECT:{}{d}BODY:{}",
        config.separator,
        hash,
        author,
        subject,
        body,
        d = config.delimiter
    )
}
