//! The replacement table: every placeholder mapped to its final, escaped value.

use std::collections::BTreeMap;

use crate::changelog::{self, Changelog};
use crate::config::ReleaseConfig;
use crate::download_files::DownloadFiles;
use crate::error::Result;
use crate::escape;
use crate::placeholder::{EscapePolicy, Placeholder, ValueSource};

/// Final values for one run, keyed by placeholder.
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    values: BTreeMap<Placeholder, String>,
    /// Outcome of download-list validation, kept for reporting.
    pub download_files: DownloadFiles,
    /// Resolved changelog, kept for reporting.
    pub changelog: Changelog,
}

impl ReplacementTable {
    /// Build the table from raw configuration.
    ///
    /// Reads the changelog file if one is configured and present.
    pub fn build(config: &ReleaseConfig) -> Result<Self> {
        let changelog =
            changelog::resolve(config.changelog_file.as_deref(), &config.changelog_fallback)?;
        let download_files = DownloadFiles::parse(config.raw(Placeholder::DownloadFiles));

        let mut values = BTreeMap::new();
        for placeholder in Placeholder::ALL {
            let value = match (placeholder.source(), placeholder.escape_policy()) {
                (ValueSource::Changelog, _) => changelog.escaped.clone(),
                (_, EscapePolicy::DoubleQuotedJson) => download_files.value().to_string(),
                (ValueSource::Env { .. }, EscapePolicy::TemplateLiteral) => {
                    escape::template_literal(config.raw(placeholder))
                }
                (ValueSource::Fixed(text), EscapePolicy::TemplateLiteral) => {
                    escape::template_literal(text)
                }
            };
            values.insert(placeholder, value);
        }

        Ok(Self {
            values,
            download_files,
            changelog,
        })
    }

    /// The escaped value for `placeholder`.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        self.values.get(&placeholder).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::CHANGELOG_LABEL;
    use std::collections::HashMap;

    fn table_from(pairs: &[(&str, &str)]) -> ReplacementTable {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        let config =
            ReleaseConfig::from_lookup(|name| Ok(env.get(name).map(|v| v.to_string()))).unwrap();
        ReplacementTable::build(&config).unwrap()
    }

    #[test]
    fn test_every_placeholder_has_a_value() {
        let table = table_from(&[]);
        for p in Placeholder::ALL {
            assert!(table.values.contains_key(&p), "missing {p}");
        }
    }

    #[test]
    fn test_env_values_are_escaped() {
        let table = table_from(&[
            ("REPLACE_VERSION", "1.2.3"),
            ("REPLACE_COMMIT_MESSAGE", "fix: use `backtick` and ${oops}"),
            ("REPLACE_TRIGGER_AUTHOR", r"dom\ain"),
        ]);
        assert_eq!(table.get(Placeholder::Version), "1.2.3");
        assert_eq!(
            table.get(Placeholder::CommitMessage),
            r"fix: use \`backtick\` and \${oops}"
        );
        assert_eq!(table.get(Placeholder::TriggerAuthor), r"dom\\ain");
    }

    #[test]
    fn test_download_files_uses_double_quoted_policy() {
        let table = table_from(&[("REPLACE_DOWNLOAD_FILES", r#"["a`b"]"#)]);
        assert_eq!(table.get(Placeholder::DownloadFiles), r#"[\"a`b\"]"#);
        assert!(table.download_files.is_valid());
    }

    #[test]
    fn test_invalid_download_files_become_empty_array() {
        let table = table_from(&[("REPLACE_DOWNLOAD_FILES", "{bad json")]);
        assert_eq!(table.get(Placeholder::DownloadFiles), "[]");
        assert!(!table.download_files.is_valid());
    }

    #[test]
    fn test_changelog_fallback_and_label() {
        let table = table_from(&[("REPLACE_CHANGELOG", "- `x`")]);
        assert_eq!(table.get(Placeholder::Changelog), r"- \`x\`");
        assert_eq!(table.get(Placeholder::ChangelogLabel), CHANGELOG_LABEL);
    }
}
