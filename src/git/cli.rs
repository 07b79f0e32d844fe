//! System git implementation of the VCS queries.
//!
//! All queries use `std::process::Command` to shell out to the system `git`
//! binary in the current directory, inheriting the user's existing git config.

use std::process::Command;

use tracing::debug;

use super::GitCli;
use crate::error::GitError;

/// Check that the git binary is available on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }
    Ok(())
}

/// Git queries backed by the system `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitCli for SystemGit {
    fn latest_tag_commit(&self) -> Result<String, GitError> {
        let out = run_git(&["rev-list", "--tags", "--max-count=1"], "rev-list")?;
        let hash = out.trim_end_matches('\n').to_string();
        if hash.is_empty() {
            return Err(GitError::NoTags);
        }
        Ok(hash)
    }

    fn tag_name(&self, commit: &str) -> Result<String, GitError> {
        let out = run_git(&["describe", "--tags", commit], "describe")?;
        Ok(out.trim_end_matches('\n').to_string())
    }

    fn log_since(&self, tag: &str, format: &str) -> Result<String, GitError> {
        let pretty = format!("--pretty={format}");
        let range = format!("{tag}...");
        run_git(&["log", &pretty, &range], "log")
    }

    fn changed_files(&self, commit: &str) -> Result<Vec<String>, GitError> {
        let out = run_git(
            &["diff-tree", "--no-commit-id", "--name-only", "-r", commit],
            "diff-tree",
        )?;
        Ok(out
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Run a git command and return its stdout, or a descriptive error.
fn run_git(args: &[&str], operation: &'static str) -> Result<String, GitError> {
    debug!(operation, ?args, "running git");

    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|source| GitError::SpawnFailed { operation, source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::NonZeroExit { operation, stderr });
    }

    String::from_utf8(output.stdout).map_err(|_| GitError::InvalidOutput { operation })
}
