//! Error types for chronik modules using thiserror.

use thiserror::Error;

/// Errors from git queries.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    NonZeroExit {
        operation: &'static str,
        stderr: String,
    },

    #[error("git {operation} produced non-UTF-8 output")]
    InvalidOutput { operation: &'static str },

    #[error("No tags found in repository. A baseline tag is required to compute the commit range")]
    NoTags,
}

/// Errors from parsing the custom-delimited log dump.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error(
        "Malformed field token '{token}': expected 'NAME:value'. The log format contract was violated"
    )]
    MalformedField { token: String },
}

/// Errors from changelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from reading the version source.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to read version file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
