//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing the overall status, a
//! severity summary, and every commit with its findings.

use crate::finding::{BatchReport, CheckStatus, CommitReport};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    checked_at: &'a str,
    status: CheckStatus,
    passed: bool,
    summary: Summary,
    commits: &'a [CommitReport],
}

#[derive(serde::Serialize)]
struct Summary {
    commits: usize,
    errors: usize,
    warnings: usize,
}

/// Formats a [`BatchReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &BatchReport) -> String {
    let (errors, warnings) = report.count_by_severity();
    let output = JsonOutput {
        checked_at: &report.checked_at,
        status: report.status,
        passed: report.passed(),
        summary: Summary {
            commits: report.commits.len(),
            errors,
            warnings,
        },
        commits: &report.commits,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
