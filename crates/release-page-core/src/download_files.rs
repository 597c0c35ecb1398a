//! Validation of the download-file list handed over by CI.
//!
//! The list arrives as JSON text in an environment variable and ends up
//! inside `JSON.parse("...")` on the page. Text that does not parse as JSON
//! is replaced by `[]` so a bad value can never break the page script.

use serde_json::Value;

use crate::escape;

/// Substituted when the raw list is not valid JSON.
pub const EMPTY_LIST: &str = "[]";

/// Result of validating a raw download-file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadFiles {
    /// Parsed JSON, re-serialized and escaped for a double-quoted string.
    Valid { escaped: String },
    /// Input that could not be used; the page gets [`EMPTY_LIST`].
    Invalid { raw: String, reason: String },
}

impl DownloadFiles {
    /// Parse `raw` and produce the value to substitute.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::Valid {
                escaped: escape::double_quoted(&value.to_string()),
            },
            Err(e) => Self::Invalid {
                raw: raw.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// The text placed into the document.
    pub fn value(&self) -> &str {
        match self {
            Self::Valid { escaped, .. } => escaped,
            Self::Invalid { .. } => EMPTY_LIST,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}
