//! Changelog resolution: a file on disk wins over the fallback variable.

use std::path::{Path, PathBuf};

use crate::error::{ReleasePageError, Result};
use crate::escape;

/// Where the changelog text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogSource {
    File(PathBuf),
    Fallback,
}

/// The changelog, already escaped for a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub escaped: String,
    pub source: ChangelogSource,
}

/// Resolve the changelog for this run.
///
/// If `file` is set and exists, its whole contents are used. Otherwise
/// `fallback` is used. The two are never combined. A file that exists but
/// cannot be read as UTF-8 is an error.
pub fn resolve(file: Option<&Path>, fallback: &str) -> Result<Changelog> {
    match file {
        Some(path) if path.exists() => {
            let text =
                std::fs::read_to_string(path).map_err(|e| ReleasePageError::ChangelogRead {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing::info!(path = %path.display(), bytes = text.len(), "using changelog file");
            Ok(Changelog {
                escaped: escape::template_literal(&text),
                source: ChangelogSource::File(path.to_path_buf()),
            })
        }
        _ => {
            if let Some(path) = file {
                tracing::debug!(path = %path.display(), "changelog file not found, using fallback");
            }
            Ok(Changelog {
                escaped: escape::template_literal(fallback),
                source: ChangelogSource::Fallback,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_wins_over_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        std::fs::write(&path, "## v1\n- `cli` flag").unwrap();

        let changelog = resolve(Some(&path), "ignored").unwrap();
        assert_eq!(changelog.escaped, "## v1\n- \\`cli\\` flag");
        assert_eq!(changelog.source, ChangelogSource::File(path));
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");

        let changelog = resolve(Some(&path), "costs ${price}").unwrap();
        assert_eq!(changelog.escaped, r"costs \${price}");
        assert_eq!(changelog.source, ChangelogSource::Fallback);
    }

    #[test]
    fn test_no_file_uses_fallback() {
        let changelog = resolve(None, "").unwrap();
        assert_eq!(changelog.escaped, "");
        assert_eq!(changelog.source, ChangelogSource::Fallback);
    }

    #[test]
    fn test_empty_file_is_still_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        std::fs::write(&path, "").unwrap();

        let changelog = resolve(Some(&path), "fallback").unwrap();
        assert_eq!(changelog.escaped, "");
        assert!(matches!(changelog.source, ChangelogSource::File(_)));
    }

    #[test]
    fn test_non_utf8_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let result = resolve(Some(&path), "fallback");
        assert!(matches!(result, Err(ReleasePageError::ChangelogRead { .. })));
    }
}
