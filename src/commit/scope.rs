//! Scope inference from changed file paths.

use tracing::debug;

use crate::git::GitCli;

/// Infer a dotted `category.component` scope from the files a commit changed.
///
/// A changed path shaped `plugins/<category>/<component>/...` is a candidate.
/// Candidates with fewer than three segments, an empty component, or the
/// placeholder component `all` are skipped. The first accepted candidate wins;
/// commits touching multiple components are attributed to whichever matching
/// path the VCS lists first.
///
/// Returns an empty string when no candidate is accepted or the VCS query
/// fails — absence of scope is a valid outcome, not an error.
pub fn infer_scope(git: &dyn GitCli, hash: &str) -> String {
    let changed_files = match git.changed_files(hash) {
        Ok(files) => files,
        Err(e) => {
            debug!(hash, error = %e, "could not list changed files, leaving scope empty");
            return String::new();
        }
    };

    for path in &changed_files {
        if let Some(scope) = scope_from_path(path) {
            return scope;
        }
    }

    String::new()
}

/// Apply the `plugins/<category>/<component>/...` path convention to one path.
fn scope_from_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').collect();

    if segments.len() < 3 || segments[0] != "plugins" {
        return None;
    }

    let (category, component) = (segments[1], segments[2]);
    if component.is_empty() || component == "all" {
        return None;
    }

    Some(format!("{category}.{component}"))
}
