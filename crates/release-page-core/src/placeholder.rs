//! The fixed set of placeholders a release page may contain.
//!
//! Each [`Placeholder`] ties together three things that never vary at runtime:
//! the literal token in the document, where its value comes from, and how that
//! value is escaped for the JavaScript context it lands in.
//!
//! ```text
//! {{VERSION}}         <- REPLACE_VERSION          (template literal)
//! {{DOWNLOAD_FILES}}  <- REPLACE_DOWNLOAD_FILES   (double-quoted JSON)
//! {{CHANGELOG}}       <- REPLACE_CHANGELOG_FILE | REPLACE_CHANGELOG
//! {{CHANGELOG_LABEL}} <- fixed label
//! ```

use std::fmt;

/// Label injected for `{{CHANGELOG_LABEL}}`. Not configurable.
pub const CHANGELOG_LABEL: &str = "查看完整 changelog";

/// How a value is made safe for the context its placeholder sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Inside a backtick-delimited template literal.
    TemplateLiteral,
    /// Re-serialized JSON inside a double-quoted string.
    DoubleQuotedJson,
}

/// Where a placeholder's raw value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// A single environment variable with a default for when it is unset.
    Env {
        var: &'static str,
        default: &'static str,
    },
    /// The resolved changelog (file contents or fallback variable).
    Changelog,
    /// A compile-time constant.
    Fixed(&'static str),
}

/// A recognized `{{NAME}}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Version,
    CreatedAt,
    CommitHash,
    PrivateBranch,
    TriggerEvent,
    TriggerRepo,
    TriggerBranch,
    TriggerCommit,
    TriggerAuthor,
    CommitMessage,
    GithubBaseUrl,
    RepoPath,
    DownloadFiles,
    Changelog,
    ChangelogLabel,
}

impl Placeholder {
    /// Every placeholder, in the order they are reported.
    pub const ALL: [Placeholder; 15] = [
        Self::Version,
        Self::CreatedAt,
        Self::CommitHash,
        Self::PrivateBranch,
        Self::TriggerEvent,
        Self::TriggerRepo,
        Self::TriggerBranch,
        Self::TriggerCommit,
        Self::TriggerAuthor,
        Self::CommitMessage,
        Self::GithubBaseUrl,
        Self::RepoPath,
        Self::DownloadFiles,
        Self::Changelog,
        Self::ChangelogLabel,
    ];

    /// The name between the braces, e.g. `VERSION`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Version => "VERSION",
            Self::CreatedAt => "CREATED_AT",
            Self::CommitHash => "COMMIT_HASH",
            Self::PrivateBranch => "PRIVATE_BRANCH",
            Self::TriggerEvent => "TRIGGER_EVENT",
            Self::TriggerRepo => "TRIGGER_REPO",
            Self::TriggerBranch => "TRIGGER_BRANCH",
            Self::TriggerCommit => "TRIGGER_COMMIT",
            Self::TriggerAuthor => "TRIGGER_AUTHOR",
            Self::CommitMessage => "COMMIT_MESSAGE",
            Self::GithubBaseUrl => "GITHUB_BASE_URL",
            Self::RepoPath => "REPO_PATH",
            Self::DownloadFiles => "DOWNLOAD_FILES",
            Self::Changelog => "CHANGELOG",
            Self::ChangelogLabel => "CHANGELOG_LABEL",
        }
    }

    /// The full literal token, e.g. `{{VERSION}}`.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Version => "{{VERSION}}",
            Self::CreatedAt => "{{CREATED_AT}}",
            Self::CommitHash => "{{COMMIT_HASH}}",
            Self::PrivateBranch => "{{PRIVATE_BRANCH}}",
            Self::TriggerEvent => "{{TRIGGER_EVENT}}",
            Self::TriggerRepo => "{{TRIGGER_REPO}}",
            Self::TriggerBranch => "{{TRIGGER_BRANCH}}",
            Self::TriggerCommit => "{{TRIGGER_COMMIT}}",
            Self::TriggerAuthor => "{{TRIGGER_AUTHOR}}",
            Self::CommitMessage => "{{COMMIT_MESSAGE}}",
            Self::GithubBaseUrl => "{{GITHUB_BASE_URL}}",
            Self::RepoPath => "{{REPO_PATH}}",
            Self::DownloadFiles => "{{DOWNLOAD_FILES}}",
            Self::Changelog => "{{CHANGELOG}}",
            Self::ChangelogLabel => "{{CHANGELOG_LABEL}}",
        }
    }

    pub fn source(&self) -> ValueSource {
        let env = |var| ValueSource::Env { var, default: "" };
        match self {
            Self::Version => env("REPLACE_VERSION"),
            Self::CreatedAt => env("REPLACE_CREATED_AT"),
            Self::CommitHash => env("REPLACE_COMMIT_HASH"),
            Self::PrivateBranch => env("REPLACE_PRIVATE_BRANCH"),
            Self::TriggerEvent => env("REPLACE_TRIGGER_EVENT"),
            Self::TriggerRepo => env("REPLACE_TRIGGER_REPO"),
            Self::TriggerBranch => env("REPLACE_TRIGGER_BRANCH"),
            Self::TriggerCommit => env("REPLACE_TRIGGER_COMMIT"),
            Self::TriggerAuthor => env("REPLACE_TRIGGER_AUTHOR"),
            Self::CommitMessage => env("REPLACE_COMMIT_MESSAGE"),
            Self::GithubBaseUrl => env("REPLACE_GITHUB_BASE_URL"),
            Self::RepoPath => env("REPLACE_REPO_PATH"),
            Self::DownloadFiles => ValueSource::Env {
                var: "REPLACE_DOWNLOAD_FILES",
                default: "[]",
            },
            Self::Changelog => ValueSource::Changelog,
            Self::ChangelogLabel => ValueSource::Fixed(CHANGELOG_LABEL),
        }
    }

    pub fn escape_policy(&self) -> EscapePolicy {
        match self {
            Self::DownloadFiles => EscapePolicy::DoubleQuotedJson,
            _ => EscapePolicy::TemplateLiteral,
        }
    }

    /// Match a recognized token at the very start of `text`.
    pub fn match_prefix(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
