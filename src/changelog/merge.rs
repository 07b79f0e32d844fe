//! Splicing a rendered section into the existing changelog document.

use std::path::Path;

use tracing::warn;

use crate::error::ChangelogError;

/// Header block written at the top of every merged document.
pub const CHANGELOG_HEADER: &str = "<!-- markdownlint-disable MD024 -->\n\n# Changelog\n";

/// The merge anchor: the first line exactly equal to this marks where prior
/// release sections begin.
const HEADING_MARKER: &str = "# Changelog";

/// Merge a rendered fragment into an existing document.
///
/// Everything after the first `# Changelog` line is the tail and is carried
/// through byte-identical; everything up to and including that line is
/// replaced by the fixed header block, a blank line, and the fragment. When
/// the marker is missing the whole document becomes the tail, so nothing is
/// lost — the new section is still prepended.
pub fn merge(existing: &str, fragment: &str) -> String {
    let mut tail = String::new();
    let mut found_marker = false;

    for line in existing.lines() {
        if !found_marker {
            if line == HEADING_MARKER {
                found_marker = true;
            }
            continue;
        }
        tail.push_str(line);
        tail.push('\n');
    }

    if !found_marker {
        warn!("heading marker '# Changelog' not found, keeping the whole document as tail");
        tail.clear();
        for line in existing.lines() {
            tail.push_str(line);
            tail.push('\n');
        }
    }

    let mut merged =
        String::with_capacity(CHANGELOG_HEADER.len() + 1 + fragment.len() + tail.len());
    merged.push_str(CHANGELOG_HEADER);
    merged.push('\n');
    merged.push_str(fragment);
    merged.push_str(&tail);
    merged
}

/// Read the changelog document, merge the fragment in, and write it back.
///
/// A missing or unreadable document is fatal (nothing to merge into), as is a
/// failed write. The overwrite is not atomic; recovery from an interrupted
/// write is manual, via version control.
pub fn merge_into_file(path: &Path, fragment: &str) -> Result<(), ChangelogError> {
    let existing = std::fs::read_to_string(path).map_err(ChangelogError::ReadFailed)?;
    let merged = merge(&existing, fragment);
    std::fs::write(path, merged).map_err(ChangelogError::WriteFailed)
}
