//! Single-pass placeholder substitution over a release page document.
//!
//! The document is scanned once from left to right. At every `{{` the known
//! tokens are tried; a match emits the table value and scanning resumes after
//! the token, so substituted text is never looked at again. A value that
//! happens to contain `{{VERSION}}` stays literal.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::{ReleasePageError, Result};
use crate::placeholder::Placeholder;
use crate::table::ReplacementTable;

/// File name of the page inside a release directory.
pub const DOCUMENT_FILE: &str = "index.html";

/// Output of a substitution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    /// Occurrences replaced, per placeholder. Absent placeholders are omitted.
    pub replaced: BTreeMap<Placeholder, usize>,
    /// Names of `{{UPPER_SNAKE}}` tokens left untouched because they are not recognized.
    pub unknown: BTreeSet<String>,
}

/// Path of the page document inside `release_dir`.
pub fn document_path(release_dir: &Path) -> PathBuf {
    release_dir.join(DOCUMENT_FILE)
}

/// Replace every recognized token in `template` with its table value.
pub fn substitute(template: &str, table: &ReplacementTable) -> Rendered {
    let mut rendered = Rendered {
        content: String::with_capacity(template.len()),
        ..Rendered::default()
    };

    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        rendered.content.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match Placeholder::match_prefix(candidate) {
            Some(placeholder) => {
                rendered.content.push_str(table.get(placeholder));
                *rendered.replaced.entry(placeholder).or_insert(0) += 1;
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                if let Some(name) = token_name(candidate) {
                    rendered.unknown.insert(name.to_string());
                }
                // Step over one brace only: `{{{VERSION}}}` still holds a token at +1.
                rendered.content.push('{');
                rest = &candidate[1..];
            }
        }
    }
    rendered.content.push_str(rest);

    rendered
}

/// Name of a placeholder-shaped token (`{{UPPER_SNAKE}}`) at the start of `text`.
fn token_name(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("{{")?;
    let end = inner.find("}}")?;
    let name = &inner[..end];
    let shaped = !name.is_empty()
        && name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    shaped.then_some(name)
}

/// Read the document at `path`, substitute, and overwrite it in place.
///
/// The write is not atomic; a crash mid-write can leave a truncated file.
pub fn render_file(path: &Path, table: &ReplacementTable) -> Result<Rendered> {
    let template = std::fs::read_to_string(path).map_err(|e| ReleasePageError::DocumentRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rendered = substitute(&template, table);
    for (placeholder, count) in &rendered.replaced {
        tracing::debug!(placeholder = placeholder.name(), count, "replaced");
    }
    for name in &rendered.unknown {
        tracing::warn!(token = %name, "unrecognized placeholder left in document");
    }

    std::fs::write(path, &rendered.content).map_err(|e| ReleasePageError::DocumentWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = rendered.content.len(), "document written");

    Ok(rendered)
}
