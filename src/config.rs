//! Run configuration for the extraction pipeline.
//!
//! The markers, field names, and ignore list are constructed once at startup
//! and threaded into the tokenizer and filter as an explicit value, so tests
//! can run with alternate marker sets.

/// Field names used in the custom log format.
pub const HASH_FIELD: &str = "HASH";
pub const AUTHOR_FIELD: &str = "AUTHOR";
pub const SUBJECT_FIELD: &str = "SUBJECT";
pub const BODY_FIELD: &str = "BODY";

/// Configuration for one changelog run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Marker placed before each commit record in the log dump.
    pub separator: String,
    /// Marker placed between fields within one record.
    pub delimiter: String,
    /// Commits whose subject contains any of these substrings are dropped.
    pub ignore_list: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        // The marker pair must not occur in ordinary commit text. Tokenization
        // trusts this; a commit body containing the literal marker misaligns
        // fields (documented limitation).
        Self {
            separator: "@@__CHGLOG__@@".to_string(),
            delimiter: "@@__CHGLOG_DELIMITER__@@".to_string(),
            ignore_list: vec!["update configs".to_string()],
        }
    }
}

impl Config {
    /// Build the pretty-format string handed to the log query.
    ///
    /// Each record starts with the separator; fields are `NAME:<placeholder>`
    /// joined by the delimiter.
    pub fn log_format(&self) -> String {
        let fields = [
            format!("{}:%h", HASH_FIELD),
            format!("{}:%an", AUTHOR_FIELD),
            format!("{}:%s", SUBJECT_FIELD),
            format!("{}:%b", BODY_FIELD),
        ];
        format!("{}{}", self.separator, fields.join(&self.delimiter))
    }
}
