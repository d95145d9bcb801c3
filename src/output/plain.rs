//! Plain-text formatter for CI logs.

use crate::finding::BatchReport;
use colored::Colorize;

const BLOCKING_ADVICE: &str = "\
Commit message errors must be fixed before merging.

Please squash or reword your commits before this PR can be merged.
Each commit on main should have a clear, descriptive message like:

  ekf2: fix height fusion timeout
  mavlink: add BATTERY_STATUS_V2 support
  boards/px4_fmu-v6x: enable UAVCAN

To squash everything into one commit:
  git rebase -i HEAD~N        # replace N with the number of commits
  git push --force-with-lease  # update the PR branch

";

const ADVISORY_ADVICE: &str = "\
Warnings above are advisory. Consider squashing cleanup commits
(review responses, formatting fixes) into their parent commits
before merge so that main stays clean.
";

/// Formats a [`BatchReport`] as plain text.
///
/// Every commit with at least one finding gets a header line (short sha and
/// subject) followed by one indented line per error and warning. A
/// remediation block follows when any error was found; otherwise an advisory
/// block follows when any warning was found. A clean batch renders as an
/// empty string.
pub fn format(report: &BatchReport) -> String {
    let mut out = String::new();

    for commit in &report.commits {
        let c = &commit.classification;
        if c.is_clean() {
            continue;
        }

        out.push_str(&format!(
            "\n  {}  {}\n",
            commit.short_sha().dimmed(),
            commit.subject
        ));
        for err in &c.errors {
            out.push_str(&format!("    {}: {}\n", "ERROR".red().bold(), err));
        }
        for warn in &c.warnings {
            out.push_str(&format!("    {}: {}\n", "WARNING".yellow().bold(), warn));
        }
    }

    if report.has_blocking {
        out.push('\n');
        out.push_str(BLOCKING_ADVICE);
    } else if report.has_warnings {
        out.push('\n');
        out.push_str(ADVISORY_ADVICE);
    }

    out
}
