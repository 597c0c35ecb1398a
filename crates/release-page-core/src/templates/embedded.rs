//! Compile-time embedded templates.
//!
//! The path is relative to this source file
//! (`crates/release-page-core/src/templates/embedded.rs`). Do NOT move the
//! template without updating the `include_str!` path here.

/// Sample release page using every recognized placeholder.
pub const RELEASE_PAGE: &str = include_str!("../../../../templates/release-page/index.html");
