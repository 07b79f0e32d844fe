//! Conventional-commit subject parsing and record classification.

use crate::config::{AUTHOR_FIELD, HASH_FIELD, SUBJECT_FIELD};
use crate::git::GitCli;

use super::{CommitRecord, RawFieldSet, scope::infer_scope};

/// Structured match of a conventional-commit subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectParts {
    pub commit_type: String,
    pub scope: Option<String>,
    pub subject: String,
}

/// Parse a subject line against the conventional-commit grammar
/// (`type(scope): subject`).
///
/// Returns `None` when the line does not match; the caller decides what an
/// uncategorized commit means (the grouper drops it from the rendered output).
pub fn parse_subject(line: &str) -> Option<SubjectParts> {
    // type is a bare word; scope may contain letters, digits, $ . - * and whitespace
    let re_pattern = r"^(\w+)(?:\(([\w$.\-*\s]*)\))?: (.*)$";

    let re = regex_lite::Regex::new(re_pattern).unwrap();
    let caps = re.captures(line)?;

    Some(SubjectParts {
        commit_type: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        scope: caps.get(2).map(|m| m.as_str().to_string()),
        subject: caps.get(3).map_or("", |m| m.as_str()).to_string(),
    })
}

/// Turn one raw field map into a [`CommitRecord`].
///
/// Recognized fields are `HASH`, `AUTHOR`, and `SUBJECT`; `BODY` is requested
/// from the log for future use but not surfaced in the record. Unknown fields
/// are ignored. A subject that does not match the grammar leaves the record
/// uncategorized rather than failing the run. When the grammar gave no scope,
/// one is inferred from the commit's changed file paths.
pub fn classify(fields: &RawFieldSet, git: &dyn GitCli) -> CommitRecord {
    let mut commit = CommitRecord::default();

    if let Some(hash) = fields.get(HASH_FIELD) {
        commit.hash = hash.clone();
    }
    if let Some(author) = fields.get(AUTHOR_FIELD) {
        commit.author_name = author.clone();
    }
    if let Some(raw_subject) = fields.get(SUBJECT_FIELD)
        && let Some(parts) = parse_subject(raw_subject)
    {
        commit.commit_type = parts.commit_type;
        commit.scope = parts.scope.unwrap_or_default();
        commit.subject = parts.subject;
    }

    if commit.scope.is_empty() {
        commit.scope = infer_scope(git, &commit.hash);
    }

    commit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitError;

    /// GitCli fake that reports a fixed set of changed files for any commit.
    struct FixedFiles(Vec<String>);

    impl GitCli for FixedFiles {
        fn latest_tag_commit(&self) -> Result<String, GitError> {
            unimplemented!("not used by classification")
        }

        fn tag_name(&self, _commit: &str) -> Result<String, GitError> {
            unimplemented!("not used by classification")
        }

        fn log_since(&self, _tag: &str, _format: &str) -> Result<String, GitError> {
            unimplemented!("not used by classification")
        }

        fn changed_files(&self, _commit: &str) -> Result<Vec<String>, GitError> {
            Ok(self.0.clone())
        }
    }

    fn fields(pairs: &[(&str, &str)]) -> RawFieldSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_subject_with_scope() {
        let parts = parse_subject("fix(api.client): retry on timeout").unwrap();
        assert_eq!(parts.commit_type, "fix");
        assert_eq!(parts.scope.as_deref(), Some("api.client"));
        assert_eq!(parts.subject, "retry on timeout");
    }

    #[test]
    fn test_parse_subject_without_scope() {
        let parts = parse_subject("feat: add new feature").unwrap();
        assert_eq!(parts.commit_type, "feat");
        assert_eq!(parts.scope, None);
        assert_eq!(parts.subject, "add new feature");
    }

    #[test]
    fn test_parse_subject_scope_special_characters() {
        let parts = parse_subject("fix(inputs.http_listener-v2 *): drop $ref").unwrap();
        assert_eq!(parts.scope.as_deref(), Some("inputs.http_listener-v2 *"));
    }

    #[test]
    fn test_parse_subject_non_conventional() {
        assert_eq!(parse_subject("update configs"), None);
        assert_eq!(parse_subject("Merge branch 'main'"), None);
    }

    #[test]
    fn test_classify_conventional_subject() {
        let git = FixedFiles(Vec::new());
        let commit = classify(
            &fields(&[
                ("HASH", "abc123"),
                ("AUTHOR", "Jane Doe"),
                ("SUBJECT", "fix(api.client): retry on timeout"),
                ("BODY", "some body text"),
            ]),
            &git,
        );

        assert_eq!(commit.hash, "abc123");
        assert_eq!(commit.author_name, "Jane Doe");
        assert_eq!(commit.commit_type, "fix");
        assert_eq!(commit.scope, "api.client");
        assert_eq!(commit.subject, "retry on timeout");
    }

    #[test]
    fn test_classify_non_conventional_subject_is_uncategorized() {
        let git = FixedFiles(Vec::new());
        let commit = classify(&fields(&[("HASH", "abc123"), ("SUBJECT", "update configs")]), &git);

        assert_eq!(commit.commit_type, "");
        assert_eq!(commit.scope, "");
        assert_eq!(commit.subject, "");
    }

    #[test]
    fn test_classify_infers_scope_when_grammar_gave_none() {
        let git = FixedFiles(vec!["plugins/inputs/mqtt/mqtt.go".to_string()]);
        let commit = classify(
            &fields(&[("HASH", "abc123"), ("SUBJECT", "fix: handle reconnect")]),
            &git,
        );

        assert_eq!(commit.scope, "inputs.mqtt");
    }

    #[test]
    fn test_classify_keeps_explicit_scope() {
        let git = FixedFiles(vec!["plugins/inputs/mqtt/mqtt.go".to_string()]);
        let commit = classify(
            &fields(&[("HASH", "abc123"), ("SUBJECT", "fix(core): handle reconnect")]),
            &git,
        );

        assert_eq!(commit.scope, "core");
    }

    #[test]
    fn test_classify_ignores_unknown_fields() {
        let git = FixedFiles(Vec::new());
        let commit = classify(
            &fields(&[("HASH", "abc123"), ("COMMITTER", "someone"), ("SUBJECT", "feat: x")]),
            &git,
        );

        assert_eq!(commit.hash, "abc123");
        assert_eq!(commit.commit_type, "feat");
    }
}
