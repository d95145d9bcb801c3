//! Output formatting for batch reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Plain`](OutputFormat::Plain)       | [`plain`]    | CI log output |
//! | [`Markdown`](OutputFormat::Markdown) | [`markdown`] | Pull-request comment body |
//! | [`Json`](OutputFormat::Json)         | [`json`]     | Automation / scripting |
//! | [`Sarif`](OutputFormat::Sarif)       | [`sarif`]    | Code-scanning upload |
//!
//! Use [`format_report`] to render a [`BatchReport`] in any of the above
//! formats.

pub mod json;
pub mod markdown;
pub mod plain;
pub mod sarif;

use crate::config::Config;
use crate::finding::BatchReport;

/// Supported output formats for the `commits` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-commit ERROR/WARNING lines followed by remediation advice.
    Plain,
    /// Markdown PR comment: blocking table if any error, advisory table if
    /// only warnings, nothing when clean.
    Markdown,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`BatchReport`] in the requested [`OutputFormat`].
///
/// Returns an empty string when there is nothing to show (a clean batch in
/// plain or markdown format).
pub fn format_report(report: &BatchReport, format: OutputFormat, config: &Config) -> String {
    match format {
        OutputFormat::Plain => plain::format(report),
        OutputFormat::Markdown => markdown::format(report, &config.project)
            .map(|body| body + "\n")
            .unwrap_or_default(),
        OutputFormat::Json => json::format(report) + "\n",
        OutputFormat::Sarif => sarif::format(report) + "\n",
    }
}
