use std::path::Path;

use anyhow::Result;

use release_page_core::changelog::ChangelogSource;
use release_page_core::config::ReleaseConfig;
use release_page_core::download_files::DownloadFiles;
use release_page_core::placeholder::Placeholder;
use release_page_core::render;
use release_page_core::table::ReplacementTable;

use crate::output;

/// Fill `<release_dir>/index.html` in place.
///
/// Sources every value from the environment, escapes it for its context,
/// and substitutes all placeholders in one pass. An invalid download-file
/// list is reported and replaced by `[]`; every other failure aborts.
pub fn run(release_dir: &Path) -> Result<()> {
    let config = ReleaseConfig::from_env()?;
    let table = ReplacementTable::build(&config)?;

    match &table.changelog.source {
        ChangelogSource::File(path) => {
            tracing::debug!(path = %path.display(), "changelog taken from file")
        }
        ChangelogSource::Fallback => tracing::debug!("changelog taken from REPLACE_CHANGELOG"),
    }

    if let DownloadFiles::Invalid { raw, reason } = &table.download_files {
        tracing::warn!(%reason, "download files are not valid JSON");
        output::print_warning(&format!("Invalid download files JSON, using []: {raw}"));
    }

    let path = render::document_path(release_dir);
    let rendered = render::render_file(&path, &table)?;
    tracing::info!(
        placeholders = rendered.replaced.len(),
        unknown = rendered.unknown.len(),
        "substitution finished"
    );

    output::print_success(&format!(
        "Template processing completed successfully (changelog: {} chars)",
        table.changelog.escaped.chars().count()
    ));
    output::print_key_value("Download files", config.raw(Placeholder::DownloadFiles));

    Ok(())
}
