//! Release page templates shipped with the binary.
//!
//! The page in `templates/release-page/index.html` is the reference document
//! the placeholder table is checked against. It shows which JavaScript
//! context each placeholder is expected in:
//! - backtick template literals for every text value and the changelog
//! - a double-quoted `JSON.parse("...")` argument for `{{DOWNLOAD_FILES}}`
//!
//! **Warning**: a placeholder added to [`crate::placeholder::Placeholder`] must
//! also be added to the sample page, or the sample page tests fail.

pub mod embedded;
