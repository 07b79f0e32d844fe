//! Denylist filtering of noisy commits.

use crate::config::Config;

/// Whether a commit subject matches the configured ignore list.
///
/// Case-sensitive substring match; used to keep routine, non-user-facing
/// commits (config-file bumps and the like) out of the rendered changelog.
/// Runs after classification, so the check sees the parsed subject rather
/// than the raw `type(scope):`-prefixed one.
pub fn is_ignored(config: &Config, subject: &str) -> bool {
    config
        .ignore_list
        .iter()
        .any(|substring| subject.contains(substring))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(ignore: &[&str]) -> Config {
        Config {
            ignore_list: ignore.iter().map(|s| s.to_string()).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn test_prefix_match_is_ignored() {
        let config = config(&["update configs"]);
        assert!(is_ignored(&config, "update configs for the 1.19 release"));
    }

    #[test]
    fn test_interior_match_is_ignored() {
        let config = config(&["update configs"]);
        assert!(is_ignored(&config, "chore: update configs and samples"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let config = config(&["update configs"]);
        assert!(!is_ignored(&config, "Update Configs"));
    }

    #[test]
    fn test_unlisted_subject_passes() {
        let config = config(&["update configs"]);
        assert!(!is_ignored(&config, "retry on timeout"));
    }

    #[test]
    fn test_empty_list_ignores_nothing() {
        let config = config(&[]);
        assert!(!is_ignored(&config, "update configs"));
    }
}
