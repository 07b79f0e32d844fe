//! Reading the release version from the version source file.

use std::path::Path;

use crate::error::VersionError;

/// Read the single-line version file.
///
/// The content is consumed verbatim — trimmed of its trailing newline and
/// prefixed with `v` — never parsed or compared.
pub fn read_version(path: &Path) -> Result<String, VersionError> {
    let raw = std::fs::read_to_string(path).map_err(|source| VersionError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    Ok(format!("v{}", raw.trim_end_matches('\n')))
}
