//! Unified error types for release-page.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while filling a release page.
///
/// A malformed download-file list is deliberately absent: it degrades to an
/// empty array instead of failing the run.
#[derive(Error, Debug)]
pub enum ReleasePageError {
    // --- Configuration ---

    /// An environment variable is set but its value is not valid Unicode.
    #[error("environment variable {name} is not valid unicode")]
    EnvNotUnicode { name: &'static str },

    // --- Document ---

    /// The page document (`index.html`) could not be read or decoded.
    #[error("failed to read document at {path}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The substituted document could not be written back.
    #[error("failed to write document at {path}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Changelog ---

    /// The changelog file exists but could not be read or decoded.
    #[error("failed to read changelog at {path}")]
    ChangelogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, ReleasePageError>`.
pub type Result<T> = std::result::Result<T, ReleasePageError>;
