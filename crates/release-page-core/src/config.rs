//! Environment-sourced configuration for a release page run.
//!
//! All inputs come from `REPLACE_*` variables set by the CI workflow. Every
//! variable is optional; an unset variable takes the default from the
//! [`Placeholder`] table. Values are taken as-is, no format checks.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{ReleasePageError, Result};
use crate::placeholder::{Placeholder, ValueSource};

/// Path of a changelog file to embed, if present on disk.
pub const CHANGELOG_FILE_VAR: &str = "REPLACE_CHANGELOG_FILE";

/// Changelog text used when no changelog file is available.
pub const CHANGELOG_FALLBACK_VAR: &str = "REPLACE_CHANGELOG";

/// Raw, unescaped inputs for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Raw value per environment-sourced placeholder.
    pub values: BTreeMap<Placeholder, String>,
    /// `REPLACE_CHANGELOG_FILE`, `None` when unset or empty.
    pub changelog_file: Option<PathBuf>,
    /// `REPLACE_CHANGELOG`.
    pub changelog_fallback: String,
}

impl ReleaseConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ReleasePageError::EnvNotUnicode { name })
            }
        })
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `lookup` returns `Ok(None)` for an unset variable.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Result<Option<String>>,
    {
        let mut values = BTreeMap::new();
        for placeholder in Placeholder::ALL {
            if let ValueSource::Env { var, default } = placeholder.source() {
                let value = lookup(var)?.unwrap_or_else(|| default.to_string());
                values.insert(placeholder, value);
            }
        }

        let changelog_file = lookup(CHANGELOG_FILE_VAR)?
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        let changelog_fallback = lookup(CHANGELOG_FALLBACK_VAR)?.unwrap_or_default();

        Ok(Self {
            values,
            changelog_file,
            changelog_fallback,
        })
    }

    /// Raw value for an environment-sourced placeholder, empty otherwise.
    pub fn raw(&self, placeholder: Placeholder) -> &str {
        self.values.get(&placeholder).map_or("", String::as_str)
    }
}
