//! Core library for release-page.
//!
//! Fills a static HTML release page from CI inputs: reads the `REPLACE_*`
//! environment ([`config`]), builds a [`table::ReplacementTable`] of escaped
//! values, and substitutes `{{NAME}}` tokens in a single pass ([`render`]).
//!
//! Values land inside JavaScript strings on the page, so every one is escaped
//! for its context first ([`escape`]). The download-file list is validated
//! as JSON and falls back to `[]` ([`download_files`]).

pub mod changelog;
pub mod config;
pub mod download_files;
pub mod error;
pub mod escape;
pub mod placeholder;
pub mod render;
pub mod table;
pub mod templates;
