//! release-page CLI: fills a static HTML release page from CI environment variables.
//!
//! Reads `<release_dir>/index.html`, replaces the `{{NAME}}` placeholders with
//! escaped values taken from `REPLACE_*` variables, and writes the page back
//! in place. See [`release_page_core::placeholder`] for the full table.

mod output;
mod process;

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "release-page",
    about = "Fill a static HTML release page from CI environment variables",
    version
)]
struct Cli {
    /// Release directory containing the index.html to fill in place
    release_dir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            output::print_error(&usage_reason(&e));
            output::print_usage();
            std::process::exit(1);
        }
    };

    // Initialize tracing; stdout is reserved for the run report
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    process::run(&cli.release_dir)?;

    Ok(())
}

/// The reason part of a clap error, without the `error:` prefix, styling, or
/// the usage block that follows it.
fn usage_reason(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let reason = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    reason
        .strip_prefix("error:")
        .map_or(reason.as_str(), str::trim_start)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(args: &[&str]) -> clap::Error {
        match Cli::try_parse_from(args) {
            Ok(_) => panic!("expected {args:?} to be rejected"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_usage_reason_names_extra_argument() {
        let reason = usage_reason(&parse_error(&["release-page", "dist", "extra"]));
        assert!(reason.contains("unexpected argument 'extra'"), "{reason}");
        assert!(!reason.starts_with("error:"));
        assert!(!reason.contains("Usage:"));
    }

    #[test]
    fn test_usage_reason_names_missing_argument() {
        let reason = usage_reason(&parse_error(&["release-page"]));
        assert!(reason.contains("required arguments were not provided"), "{reason}");
        assert!(reason.contains("<RELEASE_DIR>"), "{reason}");
    }

    #[test]
    fn test_single_argument_accepted() {
        let cli = Cli::try_parse_from(["release-page", "-v", "dist"]).unwrap();
        assert_eq!(cli.release_dir, PathBuf::from("dist"));
        assert_eq!(cli.verbose, 1);
    }
}
