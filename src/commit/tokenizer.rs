//! Splitting the raw log dump into per-record field maps.

use crate::config::Config;
use crate::error::CommitError;

use super::RawFieldSet;

/// Split a raw log dump into ordered field maps, one per commit record.
///
/// The dump contains zero or more records, each prefixed by the record
/// separator; the text before the first separator is discarded. Within a
/// record, tokens are joined by the field delimiter and have the shape
/// `NAME:value` — the name is everything before the first colon, the value
/// everything after, trimmed. Unknown field names are kept in the map and
/// ignored downstream, so newer log formats parse without changes here.
///
/// A token with no colon violates the log format contract and fails the run.
pub fn split_records(raw: &str, config: &Config) -> Result<Vec<RawFieldSet>, CommitError> {
    raw.split(&config.separator)
        .skip(1)
        .map(|record| split_fields(record, &config.delimiter))
        .collect()
}

/// Split one record into its `NAME:value` field tokens.
fn split_fields(record: &str, delimiter: &str) -> Result<RawFieldSet, CommitError> {
    let mut fields = RawFieldSet::new();

    for token in record.split(delimiter) {
        let Some((name, value)) = token.split_once(':') else {
            return Err(CommitError::MalformedField {
                token: token.to_string(),
            });
        };
        fields.insert(name.to_string(), value.trim().to_string());
    }

    Ok(fields)
}
